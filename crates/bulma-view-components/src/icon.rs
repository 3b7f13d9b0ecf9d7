//! Font icon wrapped in Bulma's `icon` container

use crate::theme::{with_theme_validators, Classes, ICON_FAMILY_VALIDATOR, SIZE_VALIDATOR};
use bulma_view_config::ThemeConfig;
use bulma_view_core::{
    Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema, Shape, Value,
};
use maud::html;
use std::sync::OnceLock;

/// `<span class="icon"><i class="fas fa-NAME"></i></span>`, optionally
/// followed by a text label inside an `icon-text` wrapper
#[derive(Debug)]
pub struct Icon {
    props: Props,
}

impl Icon {
    pub const NAME: &'static str = "Icon";

    pub fn name(&self) -> &str {
        self.props.str("name").unwrap_or_default()
    }

    pub fn family(&self) -> &str {
        self.props.str("family").unwrap_or_default()
    }
}

impl Component for Icon {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            with_theme_validators(Schema::builder(Self::NAME))
                .option(OptionDef::new("name").required().validate(Shape::String))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("family")
                            .default_with(|| {
                                Value::from(ThemeConfig::global().default_icon_family.clone())
                            })
                            .validate(Rule::named(ICON_FAMILY_VALIDATOR)),
                    )
                })
                .and_then(|b| b.option(OptionDef::new("size").validate(Rule::named(SIZE_VALIDATOR))))
                .and_then(|b| b.option(OptionDef::new("text").validate(Shape::String)))
                .and_then(|b| b.build())
                .expect("Icon schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Icon {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let container = Classes::new("icon").size(self.props.str("size")).build();
        let glyph = format!("{} fa-{}", self.family(), self.name());
        let icon = html! {
            span class=(container) { i class=(glyph) {} }
        };

        Ok(match self.props.str("text") {
            Some(text) => html! {
                span.icon-text { (icon) span { (text) } }
            },
            None => icon,
        })
    }
}
