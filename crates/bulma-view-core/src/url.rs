//! URL generation interface
//!
//! Routing belongs to the host application. Components only describe the
//! resource they link to and ask the context's [`UrlHelper`] for a URL.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resource a URL is generated for, e.g. `{"type": "post", "id": 3}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl ResourceDescriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Read a descriptor from an option value, `None` if it has the wrong shape
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Identifier as path text: strings unquoted, everything else as JSON
    pub fn id_param(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Host-provided URL generation
pub trait UrlHelper {
    fn url_for(&self, resource: &ResourceDescriptor, action: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_from_value() {
        let resource = ResourceDescriptor::from_value(&json!({"type": "post", "id": 3})).unwrap();
        assert_eq!(resource, ResourceDescriptor::new("post").with_id(3));
        assert_eq!(resource.id_param().as_deref(), Some("3"));

        let resource = ResourceDescriptor::from_value(&json!({"type": "user", "id": "ada"})).unwrap();
        assert_eq!(resource.id_param().as_deref(), Some("ada"));
    }

    #[test]
    fn descriptor_without_type_is_rejected() {
        assert!(ResourceDescriptor::from_value(&json!({"id": 3})).is_none());
        assert!(ResourceDescriptor::from_value(&json!("post")).is_none());
    }
}
