//! Pluggable value types for command-line flags and arguments
//!
//! This crate ties together:
//! - the `Type` contract and the built-in types (`argtype-types`)
//! - the type registry and resolver (`argtype-registry`)
//! - validation and configuration diagnostics (`argtype-diagnostics`)
//!
//! # Example
//!
//! ```
//! use argtype::{Declaration, Resolver, Value};
//!
//! let resolver = Resolver::default();
//! let port = Declaration::option("--port").with_type("number");
//!
//! assert_eq!(resolver.parse(&port, "8080").unwrap(), Value::Number(8080.0));
//!
//! let err = resolver.parse(&port, "abc").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Option \"--port\" must be of type \"number\", but got \"abc\"."
//! );
//! ```

pub use argtype_diagnostics as diagnostics;
pub use argtype_registry as registry;
pub use argtype_types as types;

// Convenience re-exports
pub use argtype_diagnostics::{
    ArgTypeError, ConfigurationError, Diagnostic, Result, ValidationError,
};
pub use argtype_registry::{Declaration, Resolver, TypeRegistry, effective_completions};
pub use argtype_types::{
    BooleanType, Command, CompleteHandlerResult, Completion, Completions, EnumType, ErasedType,
    IntegerType, NumberType, StringType, Type, TypeInfo, TypeValues, Value, flags,
};
