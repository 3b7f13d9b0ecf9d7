//! Option definitions and validation rules

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Validation function: receives the value and the option label, returns
/// `None` (or an empty message) on success, or the error message.
pub type ValidatorFn = Arc<dyn Fn(&Value, &str) -> Option<String> + Send + Sync>;

/// Function producing a default value at validation time
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Value kinds a [`Rule::Shape`] can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl Shape {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::String => value.is_string(),
            Shape::Integer => value.is_i64() || value.is_u64(),
            Shape::Number => value.is_number(),
            Shape::Boolean => value.is_boolean(),
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }

    /// Kind name with its indefinite article, as used in messages
    pub fn describe(&self) -> &'static str {
        match self {
            Shape::String => "a String",
            Shape::Integer => "an Integer",
            Shape::Number => "a Number",
            Shape::Boolean => "a Boolean",
            Shape::Array => "an Array",
            Shape::Object => "an Object",
        }
    }
}

/// How a supplied value is checked
#[derive(Clone)]
pub enum Rule {
    /// Value must be of the given kind
    Shape(Shape),
    /// Value must equal one of the listed values
    Inclusion(Vec<Value>),
    /// Look up a validator registered on the schema by name
    Named(String),
    /// Inline validation function
    Predicate(ValidatorFn),
    /// Apply every rule, collecting every failure
    Set(Vec<Rule>),
    /// Value must be an array; the inner rule applies to each element
    Array(Box<Rule>),
}

impl Rule {
    pub fn named(name: impl Into<String>) -> Self {
        Rule::Named(name.into())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value, &str) -> Option<String> + Send + Sync + 'static,
    {
        Rule::Predicate(Arc::new(f))
    }

    pub fn one_of<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Rule::Inclusion(values.into_iter().map(Into::into).collect())
    }

    pub fn array(inner: Rule) -> Self {
        Rule::Array(Box::new(inner))
    }

    /// Every validator name this rule refers to, nested rules included
    pub(crate) fn named_validators(&self) -> Vec<&str> {
        match self {
            Rule::Named(name) => vec![name.as_str()],
            Rule::Set(rules) => rules.iter().flat_map(Rule::named_validators).collect(),
            Rule::Array(inner) => inner.named_validators(),
            Rule::Shape(_) | Rule::Inclusion(_) | Rule::Predicate(_) => Vec::new(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Shape(shape) => f.debug_tuple("Shape").field(shape).finish(),
            Rule::Inclusion(values) => f.debug_tuple("Inclusion").field(values).finish(),
            Rule::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Rule::Predicate(_) => f.write_str("Predicate(..)"),
            Rule::Set(rules) => f.debug_tuple("Set").field(rules).finish(),
            Rule::Array(inner) => f.debug_tuple("Array").field(inner).finish(),
        }
    }
}

impl From<Shape> for Rule {
    fn from(shape: Shape) -> Self {
        Rule::Shape(shape)
    }
}

/// Default used when an option is absent
#[derive(Clone)]
pub enum DefaultValue {
    Static(Value),
    Computed(DefaultFn),
}

impl DefaultValue {
    pub fn resolve(&self) -> Value {
        match self {
            DefaultValue::Static(value) => value.clone(),
            DefaultValue::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Static(value) => f.debug_tuple("Static").field(value).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single declared input of a component type
#[derive(Debug, Clone)]
pub struct OptionDef {
    name: String,
    required: bool,
    default: Option<DefaultValue>,
    rule: Option<Rule>,
    boolean: bool,
}

impl OptionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            default: None,
            rule: None,
            boolean: false,
        }
    }

    /// Shorthand for a boolean option, absent meaning `false`
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name).boolean()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Static(value.into()));
        self
    }

    pub fn default_with<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Computed(Arc::new(f)));
        self
    }

    pub fn validate(mut self, rule: impl Into<Rule>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    pub fn default_value(&self) -> Option<Value> {
        self.default.as_ref().map(DefaultValue::resolve)
    }
}
