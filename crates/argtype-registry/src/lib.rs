//! argtype registry and resolver
//!
//! This crate provides:
//! - `TypeRegistry`, the name-to-type mapping with the built-in types
//! - `Declaration`, a flag or argument as seen by the resolver
//! - `Resolver`, which parses raw values and collects help values and
//!   completions for declarations

pub mod declaration;
pub mod registry;
pub mod resolver;

pub use declaration::*;
pub use registry::*;
pub use resolver::*;
