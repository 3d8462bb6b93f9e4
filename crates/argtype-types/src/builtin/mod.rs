//! Built-in value types

mod boolean;
mod enumeration;
mod integer;
mod number;
mod string;

pub use boolean::BooleanType;
pub use enumeration::EnumType;
pub use integer::IntegerType;
pub use number::NumberType;
pub use string::StringType;
