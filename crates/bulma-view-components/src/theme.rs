//! Theme-aware validators and Bulma modifier classes

use bulma_view_config::ThemeConfig;
use bulma_view_core::options::to_sentence;
use bulma_view_core::{SchemaBuilder, Value};

pub const COLOR_VALIDATOR: &str = "color";
pub const SIZE_VALIDATOR: &str = "size";
pub const ICON_FAMILY_VALIDATOR: &str = "icon_family";

fn check_listed(value: &Value, label: &str, allowed: &[String]) -> Option<String> {
    match value.as_str() {
        Some(name) if allowed.iter().any(|a| a == name) => None,
        Some(_) => Some(format!("{label} must be one of {}", to_sentence(allowed))),
        None => Some(format!("{label} must be a String")),
    }
}

/// Accepts the color names of the process-wide theme
pub fn validate_color(value: &Value, label: &str) -> Option<String> {
    check_listed(value, label, &ThemeConfig::global().colors)
}

pub fn validate_size(value: &Value, label: &str) -> Option<String> {
    check_listed(value, label, &ThemeConfig::global().sizes)
}

pub fn validate_icon_family(value: &Value, label: &str) -> Option<String> {
    check_listed(value, label, &ThemeConfig::global().icon_families)
}

/// Register the theme validators so options can use `Rule::named`
pub fn with_theme_validators(builder: SchemaBuilder) -> SchemaBuilder {
    builder
        .validator(COLOR_VALIDATOR, validate_color)
        .validator(SIZE_VALIDATOR, validate_size)
        .validator(ICON_FAMILY_VALIDATOR, validate_icon_family)
}

/// Space-separated Bulma class list
#[derive(Debug, Default)]
pub(crate) struct Classes(Vec<String>);

impl Classes {
    pub(crate) fn new(base: &str) -> Self {
        Self(vec![base.to_string()])
    }

    /// `is-<value>` when present
    pub(crate) fn modifier(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.0.push(format!("is-{value}"));
        }
        self
    }

    /// Like [`Classes::modifier`], but `normal` is Bulma's unmarked default
    pub(crate) fn size(self, size: Option<&str>) -> Self {
        self.modifier(size.filter(|s| *s != "normal"))
    }

    pub(crate) fn flag(mut self, on: bool, class: &str) -> Self {
        if on {
            self.0.push(class.to_string());
        }
        self
    }

    pub(crate) fn build(self) -> String {
        self.0.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulma_view_core::json;
    use test_case::test_case;

    #[test_case(json!("primary") => None; "listed color")]
    #[test_case(json!("teal") => Some("color must be one of white, black, light, dark, text, ghost, primary, link, info, success, warning, and danger".to_string()); "unlisted color")]
    #[test_case(json!(3) => Some("color must be a String".to_string()); "not a string")]
    fn test_validate_color(value: Value) -> Option<String> {
        validate_color(&value, "color")
    }

    #[test]
    fn test_validate_size_and_family() {
        assert_eq!(validate_size(&json!("large"), "size"), None);
        assert_eq!(
            validate_size(&json!("huge"), "size").as_deref(),
            Some("size must be one of small, normal, medium, and large")
        );
        assert_eq!(validate_icon_family(&json!("fab"), "family"), None);
    }

    #[test]
    fn test_classes() {
        let class = Classes::new("button")
            .modifier(Some("primary"))
            .size(Some("normal"))
            .flag(true, "is-rounded")
            .flag(false, "is-outlined")
            .build();
        assert_eq!(class, "button is-primary is-rounded");
        assert_eq!(Classes::new("tag").size(Some("large")).build(), "tag is-large");
    }
}
