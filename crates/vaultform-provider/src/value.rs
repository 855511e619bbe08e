//! Three-state attribute values
//!
//! Declarative attributes distinguish "not set" from "set to a value" from
//! "value not yet known" (computed attributes before apply). [`Value`]
//! carries those three states; the default is null.

/// A declarative attribute value: null, unknown, or a known value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value<T> {
    /// The attribute is not set in configuration or state.
    #[default]
    Null,
    /// The attribute will only be known after apply.
    Unknown,
    /// The attribute holds a concrete value.
    Known(T),
}

impl<T> Value<T> {
    pub fn known(value: T) -> Self {
        Value::Known(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(value) => Some(value),
            _ => None,
        }
    }
}

impl Value<String> {
    /// The known value, or an empty string for null/unknown.
    ///
    /// This is the write-path convention: an unset attribute is sent to the
    /// vault as an empty string.
    pub fn value_or_default(&self) -> String {
        match self {
            Value::Known(value) => value.clone(),
            _ => String::new(),
        }
    }

    /// Set this attribute only if `source` is non-empty.
    ///
    /// This is the read-path convention: an empty string coming back from
    /// the vault leaves the attribute null rather than storing "".
    pub fn set_non_empty(&mut self, source: &str) {
        if !source.is_empty() {
            *self = Value::Known(source.to_string());
        }
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Known(value.to_string())
    }
}
