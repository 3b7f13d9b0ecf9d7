use super::Options;
use crate::content::Content;
use serde_json::Value;

/// Validated, resolved options of one component instance.
///
/// Values are in schema order with defaults applied and boolean options
/// coerced. Undeclared keys are only present in [`extras`](Self::extras)
/// when the schema allows them.
#[derive(Debug)]
pub struct Props {
    component: String,
    values: Vec<(String, Value)>,
    extras: Options,
    content: Option<Content>,
}

impl Props {
    pub(crate) fn new(component: &str, values: Vec<(String, Value)>, extras: Options) -> Self {
        Self {
            component: component.to_string(),
            values,
            extras,
            content: None,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Resolved value, `None` when absent or `null`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
            .filter(|value| !value.is_null())
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Elements of an array option, empty when absent
    pub fn array(&self, name: &str) -> &[Value] {
        self.get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Derived predicate of a boolean option
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Bool(true)))
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn extras(&self) -> &Options {
        &self.extras
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub(crate) fn set_content(&mut self, content: Content) {
        self.content = Some(content);
    }
}
