//! Abstract form field: label, control, help text and error messages

use bulma_view_core::{Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema, Shape};
use maud::html;
use std::sync::OnceLock;

/// Base of every form control; never constructed directly
#[derive(Debug)]
pub struct Field;

impl Field {
    pub fn base_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder("Field")
                .abstract_component()
                .option(OptionDef::new("name").required().validate(Shape::String))
                .and_then(|b| b.option(OptionDef::new("label").validate(Shape::String)))
                .and_then(|b| b.option(OptionDef::new("help").validate(Shape::String)))
                .and_then(|b| {
                    b.option(OptionDef::new("errors").validate(Rule::array(Shape::String.into())))
                })
                .and_then(|b| b.build())
                .expect("Field schema")
        })
    }
}

impl Render for Field {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        Ok(html! {})
    }
}

impl Component for Field {
    fn schema() -> &'static Schema {
        Self::base_schema()
    }

    fn from_props(_props: Props) -> Self {
        Self
    }
}

/// Where a field's label goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelPlacement {
    /// `<label class="label">` above the control
    Above,
    /// The control renders its own label
    Inline,
}

pub(crate) fn field_name(props: &Props) -> &str {
    props.str("name").unwrap_or_default()
}

pub(crate) fn errors(props: &Props) -> Vec<&str> {
    props
        .array("errors")
        .iter()
        .filter_map(|error| error.as_str())
        .collect()
}

pub(crate) fn has_errors(props: &Props) -> bool {
    !errors(props).is_empty()
}

/// Wrap `control` in Bulma's `field` structure
pub(crate) fn field_markup(props: &Props, control: Markup, placement: LabelPlacement) -> Markup {
    let name = field_name(props);
    html! {
        div.field {
            @if placement == LabelPlacement::Above {
                @if let Some(label) = props.str("label") {
                    label.label for=(name) { (label) }
                }
            }
            div.control { (control) }
            @for error in errors(props) {
                p.help.is-danger { (error) }
            }
            @if let Some(help) = props.str("help") {
                p.help { (help) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulma_view_core::{options, ComponentError};

    #[test]
    fn field_is_abstract() {
        let err = Field::build(options! { "name" => "email" }).unwrap_err();
        assert!(matches!(err, ComponentError::AbstractComponent(ref name) if name == "Field"));
    }

    #[test]
    fn base_schema_declares_shared_options() {
        let names: Vec<&str> = Field::base_schema().names().collect();
        assert_eq!(names, ["name", "label", "help", "errors"]);
    }
}
