//! The `<form>` element

use super::token::AuthenticityToken;
use bulma_view_core::{
    options, Component, Markup, OptionDef, Props, Render, RenderContext, Result, Rule, Schema,
    Shape,
};
use maud::html;
use std::sync::OnceLock;

/// Methods a form may declare; only `get` and `post` reach the browser
const METHODS: &[&str] = &["get", "post", "patch", "put", "delete"];

#[derive(Debug)]
pub struct Form {
    props: Props,
}

impl Form {
    pub const NAME: &'static str = "Form";

    pub fn method(&self) -> &str {
        self.props.str("method").unwrap_or("post")
    }
}

impl Component for Form {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .option(OptionDef::new("action").required().validate(Shape::String))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("method")
                            .default("post")
                            .validate(Rule::one_of(METHODS.iter().copied())),
                    )
                })
                .and_then(|b| b.option(OptionDef::new("token").validate(Shape::String)))
                .and_then(|b| b.build())
                .expect("Form schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Form {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<Markup> {
        let method = self.method();
        let browser_method = if method == "get" { "get" } else { "post" };
        let remote = ctx.config().use_remote_forms;

        // GET forms never carry the token
        let token = match self.props.str("token") {
            Some(token) if method != "get" => {
                let token = AuthenticityToken::build(options! { "token" => token })?;
                Some(ctx.render(&token)?)
            }
            _ => None,
        };
        let content = match self.props.content() {
            Some(content) => Some(ctx.render_content(content)?),
            None => None,
        };

        Ok(html! {
            form action=(self.props.str("action").unwrap_or_default())
                method=(browser_method)
                data-remote=[remote.then_some("true")] {
                @if method != browser_method {
                    input type="hidden" name="_method" value=(method) autocomplete="off";
                }
                @if let Some(token) = token {
                    (token)
                }
                @if let Some(content) = content {
                    (content)
                }
            }
        })
    }
}
