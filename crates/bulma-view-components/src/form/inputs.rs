//! Concrete form controls built on [`Field`]

use super::field::{field_markup, field_name, has_errors, Field, LabelPlacement};
use crate::theme::Classes;
use bulma_view_core::{Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema, Shape};
use maud::html;
use std::sync::OnceLock;

pub const INPUT_TYPES: &[&str] = &["text", "email", "password", "number", "search", "url", "tel"];

/// Single-line `<input class="input">`
#[derive(Debug)]
pub struct TextInput {
    props: Props,
}

impl TextInput {
    pub const NAME: &'static str = "TextInput";
}

impl Component for TextInput {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .extends(Field::base_schema())
                .and_then(|b| b.option(OptionDef::new("value")))
                .and_then(|b| b.option(OptionDef::new("placeholder").validate(Shape::String)))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("input_type")
                            .default("text")
                            .validate(Rule::one_of(INPUT_TYPES.iter().copied())),
                    )
                })
                .and_then(|b| b.option(OptionDef::flag("required")))
                .and_then(|b| b.build())
                .expect("TextInput schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for TextInput {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let name = field_name(&self.props);
        let class = Classes::new("input")
            .flag(has_errors(&self.props), "is-danger")
            .build();
        // Numbers and other scalars are accepted as values
        let value = self.props.get("value").map(|value| match value.as_str() {
            Some(text) => text.to_string(),
            None => value.to_string(),
        });
        let control = html! {
            input class=(class)
                type=(self.props.str("input_type").unwrap_or("text"))
                id=(name)
                name=(name)
                value=[value]
                placeholder=[self.props.str("placeholder")]
                required[self.props.flag("required")];
        };
        Ok(field_markup(&self.props, control, LabelPlacement::Above))
    }
}

/// Drop-down wrapped in Bulma's `select` container
#[derive(Debug)]
pub struct Select {
    props: Props,
}

impl Select {
    pub const NAME: &'static str = "Select";
}

impl Component for Select {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .extends(Field::base_schema())
                .and_then(|b| {
                    b.option(
                        OptionDef::new("choices")
                            .required()
                            .validate(Rule::array(Shape::String.into())),
                    )
                })
                .and_then(|b| b.option(OptionDef::new("selected").validate(Shape::String)))
                .and_then(|b| b.build())
                .expect("Select schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Select {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let name = field_name(&self.props);
        let selected = self.props.str("selected");
        let class = Classes::new("select")
            .flag(has_errors(&self.props), "is-danger")
            .build();
        let choices = self.props.array("choices").iter().filter_map(|c| c.as_str());
        let control = html! {
            div class=(class) {
                select id=(name) name=(name) {
                    @for choice in choices {
                        option value=(choice) selected[selected == Some(choice)] { (choice) }
                    }
                }
            }
        };
        Ok(field_markup(&self.props, control, LabelPlacement::Above))
    }
}

/// Checkbox with its label beside it
#[derive(Debug)]
pub struct Checkbox {
    props: Props,
}

impl Checkbox {
    pub const NAME: &'static str = "Checkbox";
}

impl Component for Checkbox {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .extends(Field::base_schema())
                .and_then(|b| b.option(OptionDef::flag("checked")))
                .and_then(|b| b.build())
                .expect("Checkbox schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Checkbox {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let name = field_name(&self.props);
        let label = self.props.str("label").unwrap_or(name);
        let control = html! {
            label.checkbox {
                input type="checkbox" id=(name) name=(name) value="1" checked[self.props.flag("checked")];
                " " (label)
            }
        };
        Ok(field_markup(&self.props, control, LabelPlacement::Inline))
    }
}
