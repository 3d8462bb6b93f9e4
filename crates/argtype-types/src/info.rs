//! Per-occurrence parse input

use argtype_diagnostics::ValidationError;
use std::fmt;

/// Describes one occurrence of a raw value to be parsed.
///
/// Built fresh by the declaration layer for every parse attempt. The raw
/// `value` is always text; `Type::parse` is the only place it becomes typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    label: String,
    name: String,
    value: String,
    type_name: String,
}

impl TypeInfo {
    /// Create a new type info
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            value: value.into(),
            type_name: type_name.into(),
        }
    }

    /// Kind of the owning declaration, e.g. "Option" or "Argument"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declared flag/argument name, e.g. "--port"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw unparsed value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Declared type name, e.g. "number"
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Same declaration, different raw value
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    /// Build the canonical invalid-value error for this occurrence
    pub fn invalid(&self) -> ValidationError {
        ValidationError::new(&self.label, &self.name, &self.type_name, &self.value)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" ({}) = \"{}\"",
            self.label, self.name, self.type_name, self.value
        )
    }
}
