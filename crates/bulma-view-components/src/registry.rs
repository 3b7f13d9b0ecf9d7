//! The stock component registry

use crate::button::Button;
use crate::card::Card;
use crate::form::{AuthenticityToken, Checkbox, Form, Select, TextInput};
use crate::icon::Icon;
use crate::notification::Notification;
use crate::table::Table;
use crate::tag::Tag;
use bulma_view_core::Registry;

/// Register every concrete component under its type name
pub fn register_defaults(registry: &mut Registry) -> &mut Registry {
    registry
        .register_component::<Icon>(Icon::NAME)
        .register_component::<Button>(Button::NAME)
        .register_component::<Tag>(Tag::NAME)
        .register_component::<Notification>(Notification::NAME)
        .register_component::<Card>(Card::NAME)
        .register_component::<Table>(Table::NAME)
        .register_component::<TextInput>(TextInput::NAME)
        .register_component::<Select>(Select::NAME)
        .register_component::<Checkbox>(Checkbox::NAME)
        .register_component::<AuthenticityToken>(AuthenticityToken::NAME)
        .register_component::<Form>(Form::NAME)
}

/// A registry holding the stock components
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    register_defaults(&mut registry);
    tracing::debug!(components = registry.names().len(), "Built default component registry");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstract_bases_are_not_registered() {
        let registry = default_registry();
        assert_eq!(
            registry.names(),
            [
                "AuthenticityToken",
                "Button",
                "Card",
                "Checkbox",
                "Form",
                "Icon",
                "Notification",
                "Select",
                "Table",
                "Tag",
                "TextInput",
            ]
        );
        assert!(!registry.contains("Clickable"));
        assert!(!registry.contains("Field"));
    }
}
