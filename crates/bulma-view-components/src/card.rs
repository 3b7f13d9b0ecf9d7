//! Bulma cards with optional header and footer

use bulma_view_core::{Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema, Shape};
use maud::html;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct Card {
    props: Props,
}

impl Card {
    pub const NAME: &'static str = "Card";
}

impl Component for Card {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .option(OptionDef::new("title").validate(Shape::String))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("footer_items").validate(Rule::array(Shape::String.into())),
                    )
                })
                .and_then(|b| b.build())
                .expect("Card schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Card {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
        let content = match self.props.content() {
            Some(content) => Some(ctx.render_content(content)?),
            None => None,
        };
        let footer_items = self.props.array("footer_items");

        Ok(html! {
            div.card {
                @if let Some(title) = self.props.str("title") {
                    header.card-header { p.card-header-title { (title) } }
                }
                @if let Some(content) = content {
                    div.card-content { div.content { (content) } }
                }
                @if !footer_items.is_empty() {
                    footer.card-footer {
                        @for item in footer_items.iter().filter_map(|item| item.as_str()) {
                            span.card-footer-item { (item) }
                        }
                    }
                }
            }
        })
    }
}
