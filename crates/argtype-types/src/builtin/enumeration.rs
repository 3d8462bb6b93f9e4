use crate::{Command, Type, TypeInfo, TypeValues, ValidationError};
use argtype_diagnostics::ARG0005;
use std::fmt::Display;

/// Enum type. Accepts one of a fixed list of values.
///
/// Values are matched against their `Display` form and listed in declaration
/// order in help text. There is no `complete`, so completions fall back to
/// the same list.
#[derive(Debug, Clone)]
pub struct EnumType<T = String> {
    allowed: Vec<T>,
}

impl<T> EnumType<T>
where
    T: Clone + Display + Send + Sync,
{
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> &[T] {
        &self.allowed
    }

    fn guidance(&self) -> String {
        let quoted: Vec<String> = self.allowed.iter().map(|v| format!("\"{}\"", v)).collect();
        format!("Expected values: {}", quoted.join(", "))
    }
}

impl<T> Type for EnumType<T>
where
    T: Clone + Display + Send + Sync,
{
    type Output = T;

    fn parse(&self, info: &TypeInfo) -> Result<T, ValidationError> {
        self.allowed
            .iter()
            .find(|candidate| candidate.to_string() == info.value())
            .cloned()
            .ok_or_else(|| info.invalid().with_code(ARG0005).with_guidance(self.guidance()))
    }

    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        Some(self.allowed.iter().map(ToString::to_string).collect())
    }
}
