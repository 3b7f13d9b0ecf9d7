//! Render and component traits
//!
//! [`Render`] is the object-safe half every node in a tree implements.
//! [`Component`] adds the validated construction path: options are checked
//! against the type's schema and frozen into props before rendering.

use crate::content::Content;
use crate::context::RenderContext;
use crate::error::{ComponentError, Result};
use crate::options::{Options, Props, Schema};
use maud::Markup;

/// Anything that can produce markup inside a render context
pub trait Render {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup>;

    /// Invisible nodes contribute nothing to the output
    fn is_visible(&self, _ctx: &RenderContext<'_>) -> bool {
        true
    }

    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// A renderable type with a declared option schema.
///
/// Instances only exist after their options validated against
/// [`Component::schema`], and are read-only afterwards.
pub trait Component: Render + Sized + 'static {
    /// Resolved schema of this type, built once and cached
    fn schema() -> &'static Schema;

    /// Freeze validated props into an instance
    fn from_props(props: Props) -> Self;

    fn build(options: Options) -> Result<Self> {
        let props = construct(Self::schema(), &options)?;
        Ok(Self::from_props(props))
    }

    /// Build with a content block attached to the instance
    fn build_with_content(options: Options, content: impl Into<Content>) -> Result<Self> {
        let mut props = construct(Self::schema(), &options)?;
        props.set_content(content.into());
        Ok(Self::from_props(props))
    }
}

fn construct(schema: &Schema, options: &Options) -> Result<Props> {
    if schema.is_abstract() {
        return Err(ComponentError::AbstractComponent(
            schema.component().to_string(),
        ));
    }
    schema.validate(options)
}

/// Render a component tree to a markup string.
///
/// Returns an empty string when the root is not visible.
pub fn render_to_string(component: &dyn Render, ctx: &RenderContext<'_>) -> Result<String> {
    Ok(ctx.render(component)?.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options;
    use crate::options::{OptionDef, Shape};
    use maud::html;
    use std::sync::OnceLock;

    struct Greeting {
        props: Props,
    }

    impl Render for Greeting {
        fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
            let body = match self.props.content() {
                Some(content) => ctx.render_content(content)?,
                None => html! {},
            };
            Ok(html! {
                p.greeting {
                    (self.props.str("name").unwrap_or_default())
                    (body)
                }
            })
        }

        fn is_visible(&self, _ctx: &RenderContext<'_>) -> bool {
            !self.props.flag("hidden")
        }
    }

    impl Component for Greeting {
        fn schema() -> &'static Schema {
            static SCHEMA: OnceLock<Schema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                Schema::builder("Greeting")
                    .option(OptionDef::new("name").required().validate(Shape::String))
                    .and_then(|b| b.option(OptionDef::flag("hidden")))
                    .and_then(|b| b.build())
                    .expect("Greeting schema")
            })
        }

        fn from_props(props: Props) -> Self {
            Self { props }
        }
    }

    struct Shapeless;

    impl Render for Shapeless {
        fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
            Err(ComponentError::AbstractComponent("Shapeless".into()))
        }
    }

    impl Component for Shapeless {
        fn schema() -> &'static Schema {
            static SCHEMA: OnceLock<Schema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                Schema::builder("Shapeless")
                    .abstract_component()
                    .build()
                    .expect("Shapeless schema")
            })
        }

        fn from_props(_props: Props) -> Self {
            Self
        }
    }

    #[test]
    fn build_and_render() {
        let ctx = RenderContext::new();
        let greeting = Greeting::build(options! { "name" => "Ada" }).unwrap();
        assert_eq!(
            render_to_string(&greeting, &ctx).unwrap(),
            r#"<p class="greeting">Ada</p>"#
        );
    }

    #[test]
    fn content_block_is_escaped_text() {
        let ctx = RenderContext::new();
        let greeting =
            Greeting::build_with_content(options! { "name" => "Ada" }, "<b>!</b>").unwrap();
        assert_eq!(
            render_to_string(&greeting, &ctx).unwrap(),
            r#"<p class="greeting">Ada&lt;b&gt;!&lt;/b&gt;</p>"#
        );
    }

    #[test]
    fn invisible_component_renders_nothing() {
        let ctx = RenderContext::new();
        let greeting = Greeting::build(options! { "name" => "Ada", "hidden" => true }).unwrap();
        assert_eq!(render_to_string(&greeting, &ctx).unwrap(), "");
    }

    #[test]
    fn nested_invisible_component_is_skipped() {
        let ctx = RenderContext::new();
        let hidden = Greeting::build(options! { "name" => "Bob", "hidden" => true }).unwrap();
        let outer =
            Greeting::build_with_content(options! { "name" => "Ada" }, Content::component(hidden))
                .unwrap();
        assert_eq!(
            render_to_string(&outer, &ctx).unwrap(),
            r#"<p class="greeting">Ada</p>"#
        );
    }

    #[test]
    fn rendering_twice_is_identical() {
        let ctx = RenderContext::new();
        let greeting = Greeting::build(options! { "name" => "Ada" }).unwrap();
        assert_eq!(
            render_to_string(&greeting, &ctx).unwrap(),
            render_to_string(&greeting, &ctx).unwrap()
        );
    }

    #[test]
    fn invalid_options_abort_construction() {
        let err = Greeting::build(options! { "name" => 42 }).err().unwrap();
        assert_eq!(
            err.to_string(),
            "invalid options for Greeting - name must be a String"
        );
    }

    #[test]
    fn abstract_component_cannot_be_built() {
        let err = Shapeless::build(Options::new()).err().unwrap();
        assert!(matches!(err, ComponentError::AbstractComponent(ref name) if name == "Shapeless"));
    }

    #[test]
    fn type_name_is_short() {
        let greeting = Greeting::build(options! { "name" => "Ada" }).unwrap();
        assert_eq!(greeting.type_name(), "Greeting");
    }
}
