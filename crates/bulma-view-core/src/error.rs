//! Component error types

use thiserror::Error;

/// Errors raised while defining, constructing or rendering components
#[derive(Debug, Error)]
pub enum ComponentError {
    /// A schema declares an option its own type or an ancestor already declares
    #[error("{component} already declares option :{option}")]
    DuplicateOption {
        /// Component type being defined
        component: String,
        /// Option that was declared twice
        option: String,
    },

    /// Direct construction of a type marked abstract
    #[error("{0} is abstract and cannot be instantiated")]
    AbstractComponent(String),

    /// Supplied options failed validation
    #[error("{message}")]
    InvalidOptions {
        /// Component type that rejected the options
        component: String,
        /// Every individual validation message, in the order recorded
        errors: Vec<String>,
        /// The full, formatted report
        message: String,
    },

    /// A collaborator the render needs was not supplied to the context
    #[error("Missing dependency: {0} was not supplied to the render context")]
    MissingDependency(&'static str),

    /// Registry lookup found nothing under the name
    #[error("No component registered as `{name}`{}", namespace_suffix(.namespace))]
    UnknownComponent {
        /// Requested name
        name: String,
        /// Namespace searched first, if any
        namespace: Option<String>,
    },

    /// A `Named` rule refers to a validator the schema does not provide
    #[error("{component} has no validator named `{validator}`")]
    UnknownValidator {
        /// Component type being defined
        component: String,
        /// Missing validator name
        validator: String,
    },

    /// A component could not produce its markup
    #[error("Render error: {0}")]
    Render(String),
}

fn namespace_suffix(namespace: &Option<String>) -> String {
    namespace
        .as_ref()
        .map(|ns| format!(" (searched namespace `{ns}`)"))
        .unwrap_or_default()
}

/// Specialized Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;

impl ComponentError {
    /// Create a duplicate option error
    pub fn duplicate_option(component: impl Into<String>, option: impl Into<String>) -> Self {
        Self::DuplicateOption {
            component: component.into(),
            option: option.into(),
        }
    }

    /// Create a render failure
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Individual validation messages, empty for every other error kind
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::InvalidOptions { errors, .. } => errors,
            _ => &[],
        }
    }
}
