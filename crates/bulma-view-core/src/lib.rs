//! Declarative, validated view components rendered to HTML
//!
//! A component type declares its inputs once as a [`Schema`]; construction
//! validates supplied [`Options`] against it and freezes the result into
//! [`Props`]. Rendering walks the component tree depth-first in a
//! [`RenderContext`] and produces a single markup string.
//!
//! # Architecture
//!
//! ```text
//! Options -> Schema::validate -> Props -> Component::from_props
//!                                              |
//!                                              v
//!            RenderContext (config, registry, urls) -> render -> String
//! ```

pub mod component;
pub mod content;
pub mod context;
pub mod error;
pub mod options;
pub mod registry;
pub mod url;

pub use component::{render_to_string, Component, Render};
pub use content::Content;
pub use context::RenderContext;
pub use error::{ComponentError, Result};
pub use options::{OptionDef, Options, Props, Rule, Schema, SchemaBuilder, Shape};
pub use registry::{Factory, Registry};
pub use url::{ResourceDescriptor, UrlHelper};

pub use bulma_view_config::ThemeConfig;
pub use maud::{Markup, PreEscaped};
#[doc(hidden)]
pub use serde_json;
pub use serde_json::{json, Value};
