use crate::{Type, TypeInfo, ValidationError, flags};

/// Number type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberType;

impl Type for NumberType {
    type Output = f64;

    fn parse(&self, info: &TypeInfo) -> Result<f64, ValidationError> {
        flags::number(info)
    }
}
