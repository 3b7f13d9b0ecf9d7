//! Component schemas
//!
//! A [`Schema`] is the resolved, ordered set of options one component type
//! accepts. Schemas are composed, never mutated: a derived type copies the
//! definitions of the schema it extends and the mixins it includes, then adds
//! its own.
//!
//! Precedence is own > mixin > parent. Redeclaring an option the type itself
//! or its parent chain declares is a [`ComponentError::DuplicateOption`];
//! redeclaring a mixin's option replaces it in place.

use super::definition::{OptionDef, ValidatorFn};
use super::validate::validate;
use super::{Options, Props};
use crate::error::{ComponentError, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Resolved option schema of one component type
#[derive(Clone)]
pub struct Schema {
    component: String,
    options: Vec<OptionDef>,
    validators: BTreeMap<String, ValidatorFn>,
    is_abstract: bool,
    allow_extra_options: bool,
}

impl Schema {
    pub fn builder(component: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(component)
    }

    /// Name of the component type this schema belongs to
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    pub fn get(&self, name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|def| def.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(OptionDef::name)
    }

    pub fn validator(&self, name: &str) -> Option<&ValidatorFn> {
        self.validators.get(name)
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn allows_extra_options(&self) -> bool {
        self.allow_extra_options
    }

    /// Validate `supplied` against this schema with its own extras policy
    pub fn validate(&self, supplied: &Options) -> Result<Props> {
        validate(self, supplied, self.allow_extra_options)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("component", &self.component)
            .field("options", &self.options)
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .field("is_abstract", &self.is_abstract)
            .field("allow_extra_options", &self.allow_extra_options)
            .finish()
    }
}

/// Declarative builder for a [`Schema`]
pub struct SchemaBuilder {
    component: String,
    options: Vec<OptionDef>,
    own: HashSet<String>,
    ancestors: HashSet<String>,
    validators: BTreeMap<String, ValidatorFn>,
    own_validators: HashSet<String>,
    is_abstract: bool,
    allow_extra_options: bool,
}

impl SchemaBuilder {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            options: Vec::new(),
            own: HashSet::new(),
            ancestors: HashSet::new(),
            validators: BTreeMap::new(),
            own_validators: HashSet::new(),
            is_abstract: false,
            allow_extra_options: false,
        }
    }

    /// Inherit every option and validator of `parent`.
    ///
    /// The extras policy is inherited; abstractness is not.
    pub fn extends(mut self, parent: &Schema) -> Result<Self> {
        for def in parent.options() {
            if self.own.contains(def.name()) {
                return Err(ComponentError::duplicate_option(&self.component, def.name()));
            }
            self.ancestors.insert(def.name().to_string());
            if self.position(def.name()).is_none() {
                self.options.push(def.clone());
            }
        }
        for (name, f) in &parent.validators {
            if self.own_validators.contains(name) {
                continue;
            }
            self.validators
                .entry(name.clone())
                .or_insert_with(|| Arc::clone(f));
        }
        self.allow_extra_options |= parent.allow_extra_options;
        Ok(self)
    }

    /// Mix in the options and validators of `mixin`
    pub fn include(mut self, mixin: &Schema) -> Self {
        for def in mixin.options() {
            if self.own.contains(def.name()) {
                continue;
            }
            match self.position(def.name()) {
                Some(index) => self.options[index] = def.clone(),
                None => self.options.push(def.clone()),
            }
        }
        for (name, f) in &mixin.validators {
            if !self.own_validators.contains(name) {
                self.validators.insert(name.clone(), Arc::clone(f));
            }
        }
        self
    }

    /// Declare an option on this type
    pub fn option(mut self, def: OptionDef) -> Result<Self> {
        let name = def.name().to_string();
        if self.own.contains(&name) || self.ancestors.contains(&name) {
            return Err(ComponentError::duplicate_option(&self.component, name));
        }
        match self.position(&name) {
            Some(index) => self.options[index] = def,
            None => self.options.push(def),
        }
        self.own.insert(name);
        Ok(self)
    }

    /// Register a validator that `Rule::Named` can refer to
    pub fn validator<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &str) -> Option<String> + Send + Sync + 'static,
    {
        let name = name.into();
        self.own_validators.insert(name.clone());
        self.validators.insert(name, Arc::new(f));
        self
    }

    /// Mark the type abstract: it can be extended but never constructed
    pub fn abstract_component(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Capture undeclared keys instead of rejecting them
    pub fn allow_extra_options(mut self) -> Self {
        self.allow_extra_options = true;
        self
    }

    pub fn build(self) -> Result<Schema> {
        for def in &self.options {
            let Some(rule) = def.rule() else { continue };
            for validator in rule.named_validators() {
                if !self.validators.contains_key(validator) {
                    return Err(ComponentError::UnknownValidator {
                        component: self.component.clone(),
                        validator: validator.to_string(),
                    });
                }
            }
        }

        Ok(Schema {
            component: self.component,
            options: self.options,
            validators: self.validators,
            is_abstract: self.is_abstract,
            allow_extra_options: self.allow_extra_options,
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|def| def.name() == name)
    }
}
