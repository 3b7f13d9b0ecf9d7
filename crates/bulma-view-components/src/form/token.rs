//! Hidden CSRF token input

use bulma_view_core::{Component, Markup, OptionDef, Props, Render, RenderContext, Result, Schema, Shape};
use maud::html;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct AuthenticityToken {
    props: Props,
}

impl AuthenticityToken {
    pub const NAME: &'static str = "AuthenticityToken";
    pub const FIELD: &'static str = "authenticity_token";
}

impl Component for AuthenticityToken {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .option(OptionDef::new("token").required().validate(Shape::String))
                .and_then(|b| b.build())
                .expect("AuthenticityToken schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for AuthenticityToken {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        Ok(html! {
            input type="hidden" name=(Self::FIELD) value=(self.props.str("token").unwrap_or_default()) autocomplete="off";
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulma_view_core::{options, render_to_string};

    #[test]
    fn renders_hidden_input() {
        let token = AuthenticityToken::build(options! { "token" => "s3cr3t" }).unwrap();
        assert_eq!(
            render_to_string(&token, &RenderContext::new()).unwrap(),
            r#"<input type="hidden" name="authenticity_token" value="s3cr3t" autocomplete="off">"#
        );
    }

    #[test]
    fn token_is_required() {
        let err = AuthenticityToken::build(options! {}).unwrap_err();
        assert_eq!(err.validation_errors(), ["token can't be blank"]);
    }
}
