//! Diagnostics for argtype
//!
//! This crate provides the error handling infrastructure shared by the type
//! contract, the built-in types and the registry, including error codes and
//! user-facing diagnostic reporting.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for argtype operations
pub type Result<T> = std::result::Result<T, ArgTypeError>;
