//! Declarative attribute schema descriptors
//!
//! The driving framework consumes these to build its plan/diff machinery;
//! this layer only declares shape and flags. Attributes are built with a
//! small chained-constructor style so subtype modules read close to the
//! schema they describe.

use crate::error::ProviderError;
use crate::validators;
use crate::value::Value;

/// Attribute value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    StringList,
}

/// Plan behavior attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanModifier {
    /// Keep the prior state value when the planned value is unknown.
    /// Used on server-assigned ids.
    UseStateForUnknown,
    /// Any change to this attribute forces resource replacement.
    RequiresReplace,
}

/// Declarative string validator attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringValidator {
    EntryId,
    VaultId,
}

impl StringValidator {
    /// Run this validator against a config value. Null and unknown values
    /// always pass; evaluation is deferred until the value is known.
    pub fn validate(&self, value: &Value<String>) -> Result<(), ProviderError> {
        match self {
            StringValidator::EntryId => validators::validate_entry_id(value),
            StringValidator::VaultId => validators::validate_vault_id(value),
        }
    }
}

/// One attribute in a resource or data-source schema.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub validators: Vec<StringValidator>,
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: AttributeKind::String,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
        }
    }

    pub fn string_list(name: &'static str, description: &'static str) -> Self {
        Self {
            kind: AttributeKind::StringList,
            ..Self::string(name, description)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn validator(mut self, validator: StringValidator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }
}

/// A resource or data-source schema.
#[derive(Debug, Clone)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}
