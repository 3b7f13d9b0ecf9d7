//! Bulma `tag` labels

use crate::theme::{with_theme_validators, Classes, COLOR_VALIDATOR, SIZE_VALIDATOR};
use bulma_view_core::{
    Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema, Shape,
};
use maud::html;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct Tag {
    props: Props,
}

impl Tag {
    pub const NAME: &'static str = "Tag";
}

impl Component for Tag {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            with_theme_validators(Schema::builder(Self::NAME))
                .option(OptionDef::new("text").required().validate(Shape::String))
                .and_then(|b| b.option(OptionDef::new("color").validate(Rule::named(COLOR_VALIDATOR))))
                .and_then(|b| b.option(OptionDef::new("size").validate(Rule::named(SIZE_VALIDATOR))))
                .and_then(|b| b.option(OptionDef::flag("rounded")))
                .and_then(|b| b.option(OptionDef::flag("deletable")))
                .and_then(|b| b.build())
                .expect("Tag schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Tag {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let class = Classes::new("tag")
            .modifier(self.props.str("color"))
            .size(self.props.str("size"))
            .flag(self.props.flag("rounded"), "is-rounded")
            .build();
        Ok(html! {
            span class=(class) {
                (self.props.str("text").unwrap_or_default())
                @if self.props.flag("deletable") {
                    button.delete.is-small type="button" {}
                }
            }
        })
    }
}
