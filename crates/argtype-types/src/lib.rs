//! argtype value types
//!
//! This crate defines the contract every value type satisfies and the
//! pieces that flow through it:
//! - `TypeInfo`, the description of one raw value to parse
//! - the `Type` trait (`parse`, optional `values`, optional `complete`)
//! - `ErasedType` and `Value` for storing heterogeneous types in a registry
//! - shell completion results
//! - flag-value primitives and the built-in types built on them

pub mod builtin;
pub mod command;
pub mod completion;
pub mod flags;
pub mod info;
pub mod value;
pub mod value_type;

pub use builtin::*;
pub use command::*;
pub use completion::*;
pub use info::*;
pub use value::*;
pub use value_type::*;
