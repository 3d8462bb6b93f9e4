//! Error types for value parsing and type resolution

use crate::{ARG0001, ARG0100, ARG0101, ARG0102, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the value or declaration cannot be used
    Error,
    /// Warning - potential issue but parsing can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A user-facing diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)
    }
}

/// A raw value could not be converted into the declared type.
///
/// The message is self-contained: it quotes the declaration label and name,
/// the declared type and the offending value, so a reporter never has to
/// reconstruct that context. The canonical headline is
/// `<label> "<name>" must be of type "<type>", but got "<value>".`, followed
/// by optional guidance such as the list of accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{headline}{}", guidance_suffix(.guidance.as_deref()))]
pub struct ValidationError {
    code: ErrorCode,
    label: String,
    name: String,
    type_name: String,
    value: String,
    headline: String,
    guidance: Option<String>,
}

impl ValidationError {
    /// Create an invalid-value error using the canonical headline
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let (label, name, type_name, value) =
            (label.into(), name.into(), type_name.into(), value.into());
        Self {
            code: ARG0001,
            headline: format!(
                "{} \"{}\" must be of type \"{}\", but got \"{}\".",
                label, name, type_name, value
            ),
            label,
            name,
            type_name,
            value,
            guidance: None,
        }
    }

    /// Append guidance after the headline (e.g. the accepted values)
    pub fn with_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.guidance = Some(guidance.into());
        self
    }

    /// Replace the canonical headline with a custom one
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.headline = message.into();
        self
    }

    /// Set a more specific validation error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn guidance(&self) -> Option<&str> {
        self.guidance.as_deref()
    }

    /// The headline without guidance
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code, self.headline());
        if let Some(guidance) = &self.guidance {
            diag = diag.with_help(guidance.clone());
        } else if let Some(help) = self.code.info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}

fn guidance_suffix(guidance: Option<&str>) -> String {
    guidance.map(|g| format!(" {}", g)).unwrap_or_default()
}

/// A type binding is missing or malformed.
///
/// Raised only by the registry and resolver, never by a type's `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No type is registered under the declared name
    #[error("Unknown type \"{name}\". Registered types: {}", .known.join(", "))]
    UnknownType { name: String, known: Vec<String> },

    /// A type is already registered under this name
    #[error("Type \"{name}\" is already registered")]
    DuplicateType { name: String },

    /// The name cannot be used as a type name
    #[error("Invalid type name \"{name}\"")]
    InvalidTypeName { name: String },
}

impl ConfigurationError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownType { .. } => ARG0100,
            Self::DuplicateType { .. } => ARG0101,
            Self::InvalidTypeName { .. } => ARG0102,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self.code().info().help {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// Main argtype error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgTypeError {
    /// A value failed to parse
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A type name could not be resolved or registered
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Multiple errors collected, one per failed declaration
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<ArgTypeError>),
}

impl ArgTypeError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::Configuration(err) => err.code(),
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Check whether this is (or only contains) validation errors
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Configuration(_) => false,
            Self::Multiple(errors) => errors.iter().all(|e| e.is_validation()),
        }
    }

    /// Convert to one diagnostic per underlying error
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::Validation(err) => vec![err.to_diagnostic()],
            Self::Configuration(err) => vec![err.to_diagnostic()],
            Self::Multiple(errors) => errors.iter().flat_map(|e| e.to_diagnostics()).collect(),
        }
    }
}
