//! Content blocks attached to components

use crate::component::Render;
use maud::{Markup, PreEscaped};
use std::fmt;

/// Opaque renderable payload substituted into a component's content slot.
///
/// Blocks are rendered lazily, when the owning component asks the render
/// context for them.
pub enum Content {
    /// Plain text, escaped on render
    Text(String),
    /// Trusted markup, emitted as is
    Markup(Markup),
    /// A nested component
    Component(Box<dyn Render>),
    /// Several blocks rendered in order
    Fragment(Vec<Content>),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Trusted markup; the string is not escaped
    pub fn raw(markup: impl Into<String>) -> Self {
        Content::Markup(PreEscaped(markup.into()))
    }

    pub fn component(component: impl Render + 'static) -> Self {
        Content::Component(Box::new(component))
    }

    pub fn fragment(items: impl IntoIterator<Item = Content>) -> Self {
        Content::Fragment(items.into_iter().collect())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Markup(markup)
    }
}

impl From<Box<dyn Render>> for Content {
    fn from(component: Box<dyn Render>) -> Self {
        Content::Component(component)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Markup(markup) => f.debug_tuple("Markup").field(&markup.0).finish(),
            Content::Component(component) => f
                .debug_tuple("Component")
                .field(&component.type_name())
                .finish(),
            Content::Fragment(items) => f.debug_tuple("Fragment").field(items).finish(),
        }
    }
}
