//! Option validation
//!
//! Validation is total: every supplied key and every declared option is
//! checked, all messages are collected, and either the whole map resolves or
//! a single [`ComponentError::InvalidOptions`] describes everything wrong.

use super::definition::Rule;
use super::schema::Schema;
use super::value::{is_truthy, to_sentence};
use super::{Options, Props};
use crate::error::{ComponentError, Result};
use serde_json::Value;

/// Validate `supplied` against `schema` and resolve defaults and booleans.
///
/// Unknown keys are reported before any per-option message. A required
/// option that is missing skips its own remaining checks only.
pub fn validate(schema: &Schema, supplied: &Options, allow_extra_options: bool) -> Result<Props> {
    let mut errors = Vec::new();
    let mut extras = Options::new();
    let mut has_unknown = false;

    for (key, value) in supplied.iter() {
        if schema.get(key).is_some() {
            continue;
        }
        if allow_extra_options {
            extras.insert(key, value.clone());
        } else {
            errors.push(format!("unknown option :{key}"));
            has_unknown = true;
        }
    }

    let mut values = Vec::with_capacity(schema.options().len());
    for def in schema.options() {
        let raw = supplied.get(def.name()).filter(|value| !value.is_null());

        if def.is_required() && raw.is_none() {
            errors.push(format!("{} can't be blank", def.name()));
            continue;
        }

        if let (Some(rule), Some(value)) = (def.rule(), raw) {
            check_rule(schema, rule, value, def.name(), &mut errors);
        }

        let resolved = match raw {
            Some(value) => value.clone(),
            None => def.default_value().unwrap_or(Value::Null),
        };
        let resolved = if def.is_boolean() {
            Value::Bool(is_truthy(&resolved))
        } else {
            resolved
        };
        values.push((def.name().to_string(), resolved));
    }

    if errors.is_empty() {
        return Ok(Props::new(schema.component(), values, extras));
    }

    let message = failure_message(schema, &errors, has_unknown);
    tracing::debug!(
        component = schema.component(),
        error_count = errors.len(),
        "Rejected component options"
    );
    Err(ComponentError::InvalidOptions {
        component: schema.component().to_string(),
        errors,
        message,
    })
}

fn check_rule(schema: &Schema, rule: &Rule, value: &Value, label: &str, errors: &mut Vec<String>) {
    match rule {
        Rule::Shape(shape) => {
            if !shape.matches(value) {
                errors.push(format!("{label} must be {}", shape.describe()));
            }
        }
        Rule::Inclusion(allowed) => {
            if !allowed.contains(value) {
                let listed: Vec<String> = allowed.iter().map(Value::to_string).collect();
                errors.push(format!("{label} must be one of {}", listed.join(", ")));
            }
        }
        Rule::Named(name) => {
            if let Some(f) = schema.validator(name) {
                push_message(errors, f(value, label));
            }
        }
        Rule::Predicate(f) => push_message(errors, f(value, label)),
        Rule::Set(rules) => {
            for rule in rules {
                check_rule(schema, rule, value, label, errors);
            }
        }
        Rule::Array(inner) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    check_rule(schema, inner, item, &format!("{label}[{index}]"), errors);
                }
            }
            None => errors.push(format!("{label} must be an Array")),
        },
    }
}

fn push_message(errors: &mut Vec<String>, message: Option<String>) {
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        errors.push(message);
    }
}

fn failure_message(schema: &Schema, errors: &[String], has_unknown: bool) -> String {
    let mut message = format!(
        "invalid options for {} - {}",
        schema.component(),
        errors.join(", ")
    );

    if has_unknown {
        let mut names: Vec<String> = schema.names().map(|name| format!(":{name}")).collect();
        if names.is_empty() {
            message.push_str(&format!(". {} does not declare any options", schema.component()));
        } else {
            names.sort();
            message.push_str(&format!(". Valid options are {}", to_sentence(&names)));
        }
    }

    message
}
