//! Buttons and the clickable base they share

use crate::icon::Icon;
use crate::theme::{with_theme_validators, Classes, COLOR_VALIDATOR, SIZE_VALIDATOR};
use bulma_view_core::{
    options, Component, Markup, OptionDef, Props, Render, RenderContext, ResourceDescriptor,
    Result, Rule, Schema, Shape,
};
use maud::html;
use std::sync::OnceLock;

/// Abstract base of everything rendered as a Bulma `button`
#[derive(Debug)]
pub struct Clickable;

impl Clickable {
    /// Options shared by all clickables
    pub fn base_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            with_theme_validators(Schema::builder("Clickable"))
                .abstract_component()
                .option(OptionDef::new("label").validate(Shape::String))
                .and_then(|b| b.option(OptionDef::new("color").validate(Rule::named(COLOR_VALIDATOR))))
                .and_then(|b| b.option(OptionDef::new("size").validate(Rule::named(SIZE_VALIDATOR))))
                .and_then(|b| b.option(OptionDef::flag("disabled")))
                .and_then(|b| b.option(OptionDef::flag("outlined")))
                .and_then(|b| b.option(OptionDef::flag("rounded")))
                .and_then(|b| b.build())
                .expect("Clickable schema")
        })
    }

    /// `button` plus the color, size and style modifiers
    pub(crate) fn classes(props: &Props) -> String {
        Classes::new("button")
            .modifier(props.str("color"))
            .size(props.str("size"))
            .flag(props.flag("outlined"), "is-outlined")
            .flag(props.flag("rounded"), "is-rounded")
            .build()
    }
}

impl Render for Clickable {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        Ok(html! {})
    }
}

impl Component for Clickable {
    fn schema() -> &'static Schema {
        Self::base_schema()
    }

    fn from_props(_props: Props) -> Self {
        Self
    }
}

fn resource_rule() -> Rule {
    Rule::predicate(|value, label| {
        ResourceDescriptor::from_value(value)
            .is_none()
            .then(|| format!("{label} must be an Object with a type"))
    })
}

/// A `<button>`, or an `<a class="button">` when it links somewhere
#[derive(Debug)]
pub struct Button {
    props: Props,
}

impl Button {
    pub const NAME: &'static str = "Button";

    /// Link target: an explicit `href`, else the URL of `resource` + `action`
    fn target(&self, ctx: &RenderContext<'_>) -> Result<Option<String>> {
        if let Some(href) = self.props.str("href") {
            return Ok(Some(href.to_string()));
        }
        let Some(resource) = self.props.get("resource").and_then(ResourceDescriptor::from_value)
        else {
            return Ok(None);
        };
        let action = self.props.str("action").unwrap_or("show");
        ctx.url_for(&resource, action).map(Some)
    }

    fn body(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
        let label = match self.props.content() {
            Some(content) => ctx.render_content(content)?,
            None => html! { (self.props.str("label").unwrap_or_default()) },
        };
        let Some(icon) = self.props.str("icon") else {
            return Ok(label);
        };

        let mut icon_options = options! { "name" => icon };
        if let Some(size) = self.props.str("size") {
            icon_options.insert("size", size);
        }
        let icon = ctx.render_named(Icon::NAME, icon_options, None)?;
        Ok(html! { (icon) span { (label) } })
    }
}

impl Component for Button {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .extends(Clickable::base_schema())
                .and_then(|b| b.option(OptionDef::new("href").validate(Shape::String)))
                .and_then(|b| b.option(OptionDef::new("resource").validate(resource_rule())))
                .and_then(|b| b.option(OptionDef::new("action").validate(Shape::String)))
                .and_then(|b| b.option(OptionDef::new("icon").validate(Shape::String)))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("kind")
                            .default("button")
                            .validate(Rule::one_of(["button", "submit", "reset"])),
                    )
                })
                .and_then(|b| b.build())
                .expect("Button schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Button {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
        let class = Clickable::classes(&self.props);
        let disabled = self.props.flag("disabled");
        let body = self.body(ctx)?;

        Ok(match self.target(ctx)? {
            Some(href) => html! {
                a class=(class) href=(href) disabled[disabled] { (body) }
            },
            None => html! {
                button class=(class) type=(self.props.str("kind").unwrap_or("button")) disabled[disabled] {
                    (body)
                }
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulma_view_core::{json, render_to_string, ComponentError, Registry, UrlHelper};

    struct Routes;

    impl UrlHelper for Routes {
        fn url_for(&self, resource: &ResourceDescriptor, action: &str) -> Result<String> {
            let mut url = format!("/{}s", resource.kind);
            if let Some(id) = resource.id_param() {
                url.push_str(&format!("/{id}"));
            }
            if action != "show" {
                url.push_str(&format!("/{action}"));
            }
            Ok(url)
        }
    }

    #[test]
    fn clickable_cannot_be_built() {
        let err = Clickable::build(options! { "label" => "x" }).unwrap_err();
        assert!(matches!(err, ComponentError::AbstractComponent(ref name) if name == "Clickable"));
    }

    #[test]
    fn plain_button() {
        let button = Button::build(options! {
            "label" => "Save", "color" => "primary", "rounded" => true
        })
        .unwrap();
        assert_eq!(
            render_to_string(&button, &RenderContext::new()).unwrap(),
            r#"<button class="button is-primary is-rounded" type="button">Save</button>"#
        );
    }

    #[test]
    fn href_renders_a_link() {
        let button = Button::build(options! {
            "label" => "Docs", "href" => "/docs", "disabled" => true
        })
        .unwrap();
        assert_eq!(
            render_to_string(&button, &RenderContext::new()).unwrap(),
            r#"<a class="button" href="/docs" disabled>Docs</a>"#
        );
    }

    #[test]
    fn resource_goes_through_url_helper() {
        let button = Button::build(options! {
            "label" => "Edit",
            "resource" => json!({ "type": "post", "id": 7 }),
            "action" => "edit",
        })
        .unwrap();

        let routes = Routes;
        let ctx = RenderContext::new().with_url_helper(&routes);
        assert_eq!(
            render_to_string(&button, &ctx).unwrap(),
            r#"<a class="button" href="/posts/7/edit">Edit</a>"#
        );

        let err = render_to_string(&button, &RenderContext::new()).unwrap_err();
        assert!(matches!(err, ComponentError::MissingDependency("url helper")));
    }

    #[test]
    fn icon_is_resolved_through_registry() {
        let mut registry = Registry::new();
        registry.register_component::<Icon>(Icon::NAME);
        let ctx = RenderContext::new().with_registry(&registry);

        let button = Button::build(options! { "label" => "Add", "icon" => "plus", "kind" => "submit" }).unwrap();
        assert_eq!(
            render_to_string(&button, &ctx).unwrap(),
            r#"<button class="button" type="submit"><span class="icon"><i class="fas fa-plus"></i></span><span>Add</span></button>"#
        );
    }

    #[test]
    fn invalid_options_are_reported_together() {
        let err = Button::build(options! {
            "color" => "teal", "kind" => "link", "resource" => "post"
        })
        .unwrap_err();
        assert_eq!(
            err.validation_errors(),
            [
                "color must be one of white, black, light, dark, text, ghost, primary, link, info, success, warning, and danger",
                "resource must be an Object with a type",
                r#"kind must be one of "button", "submit", "reset""#,
            ]
        );
    }
}
