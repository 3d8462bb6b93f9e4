//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - ARG0001-ARG0099: Validation errors (invalid values supplied by the user)
//! - ARG0100-ARG0199: Configuration errors (type registration and lookup)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a validation error (0001-0099)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a configuration error (0100-0199)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARG{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Validation errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid value"));
    map.insert(2, ErrorInfo::new("Invalid number")
        .with_help("Use a decimal, exponent or 0x/0o/0b prefixed number"));
    map.insert(3, ErrorInfo::new("Invalid integer")
        .with_help("Use a whole number without a fractional part"));
    map.insert(4, ErrorInfo::new("Invalid boolean")
        .with_help("Use one of: true, false, 1, 0"));
    map.insert(5, ErrorInfo::new("Value not in allowed set"));

    // Configuration errors (0100-0199)
    map.insert(100, ErrorInfo::new("Unknown type")
        .with_help("Register the type before declaring flags that use it"));
    map.insert(101, ErrorInfo::new("Duplicate type registration"));
    map.insert(102, ErrorInfo::new("Invalid type name")
        .with_help("Type names must be non-empty and contain no whitespace"));

    map
});

// Validation errors
pub const ARG0001: ErrorCode = ErrorCode::new(1);
pub const ARG0002: ErrorCode = ErrorCode::new(2);
pub const ARG0003: ErrorCode = ErrorCode::new(3);
pub const ARG0004: ErrorCode = ErrorCode::new(4);
pub const ARG0005: ErrorCode = ErrorCode::new(5);

// Configuration errors
pub const ARG0100: ErrorCode = ErrorCode::new(100);
pub const ARG0101: ErrorCode = ErrorCode::new(101);
pub const ARG0102: ErrorCode = ErrorCode::new(102);
