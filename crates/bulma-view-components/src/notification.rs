//! Dismissible Bulma notifications

use crate::theme::{with_theme_validators, Classes, COLOR_VALIDATOR};
use bulma_view_core::{Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema};
use maud::html;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct Notification {
    props: Props,
}

impl Notification {
    pub const NAME: &'static str = "Notification";
}

impl Component for Notification {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            with_theme_validators(Schema::builder(Self::NAME))
                .option(OptionDef::new("color").validate(Rule::named(COLOR_VALIDATOR)))
                .and_then(|b| b.option(OptionDef::flag("dismissible")))
                .and_then(|b| b.option(OptionDef::flag("hidden")))
                .and_then(|b| b.build())
                .expect("Notification schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Notification {
    fn is_visible(&self, _ctx: &RenderContext<'_>) -> bool {
        !self.props.flag("hidden")
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
        let class = Classes::new("notification")
            .modifier(self.props.str("color"))
            .build();
        let content = match self.props.content() {
            Some(content) => Some(ctx.render_content(content)?),
            None => None,
        };
        Ok(html! {
            div class=(class) {
                @if self.props.flag("dismissible") {
                    button.delete type="button" {}
                }
                @if let Some(content) = content {
                    (content)
                }
            }
        })
    }
}
