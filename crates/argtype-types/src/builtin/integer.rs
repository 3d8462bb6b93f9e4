use crate::{Type, TypeInfo, ValidationError, flags};

/// Integer type. Accepts whole numbers only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerType;

impl Type for IntegerType {
    type Output = i64;

    fn parse(&self, info: &TypeInfo) -> Result<i64, ValidationError> {
        flags::integer(info)
    }
}
