//! Flag and argument declarations

use std::fmt;

/// A flag or argument whose values are parsed by a registered type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    label: String,
    name: String,
    type_name: Option<String>,
}

impl Declaration {
    /// Create a declaration with an arbitrary label
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            type_name: None,
        }
    }

    /// A flag, e.g. `--port`
    pub fn option(name: impl Into<String>) -> Self {
        Self::new("Option", name)
    }

    /// A positional argument
    pub fn argument(name: impl Into<String>) -> Self {
        Self::new("Argument", name)
    }

    /// Set the declared type name
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type name, `None` for the default type
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.label, self.name)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " <{}>", type_name)?;
        }
        Ok(())
    }
}
