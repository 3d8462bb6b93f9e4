use crate::{Type, TypeInfo, ValidationError, flags};

/// String type. Allows any value.
///
/// Declarations without a type name use this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl Type for StringType {
    type Output = String;

    fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
        flags::string(info)
    }
}
