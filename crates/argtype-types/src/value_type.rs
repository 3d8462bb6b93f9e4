//! The value type contract
//!
//! Every value type, built-in or user-supplied, implements [`Type`]: one
//! required operation (`parse`) and two optional ones (`values`, `complete`).
//! The optional operations return `Option` so that "not provided" stays
//! distinguishable from "provided but empty".
//!
//! # Custom type example
//!
//! ```
//! use argtype_types::{Command, Type, TypeInfo, TypeValues, ValidationError};
//!
//! struct ColorType;
//!
//! impl Type for ColorType {
//!     type Output = String;
//!
//!     fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
//!         if !["red", "blue"].contains(&info.value()) {
//!             return Err(info.invalid().with_guidance("Valid colors are: red, blue"));
//!         }
//!         Ok(info.value().to_string())
//!     }
//!
//!     fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
//!         Some(vec!["red".into(), "blue".into()])
//!     }
//! }
//!
//! let info = TypeInfo::new("Option", "--color", "color", "green");
//! let err = ColorType.parse(&info).unwrap_err();
//! assert!(err.to_string().contains("Valid colors are: red, blue"));
//! ```

pub use argtype_diagnostics::ValidationError;

use crate::{Command, CompleteHandlerResult, TypeInfo, TypeValues, Value};

/// A value type: converts raw text into `Output` and optionally offers help
/// values and completion candidates.
///
/// Implementations are stateless strategy objects, shared between every
/// declaration that names them and possibly called from several threads at
/// once, hence `Send + Sync`.
pub trait Type: Send + Sync {
    /// The typed result of a successful parse
    type Output;

    /// Convert `info.value()` into the typed result.
    ///
    /// Must be a pure function of `info`. Fails with a [`ValidationError`]
    /// whose message quotes the label, name, type and value; `info.invalid()`
    /// builds the canonical one.
    fn parse(&self, info: &TypeInfo) -> Result<Self::Output, ValidationError>;

    /// Values displayed in help text.
    ///
    /// `None` means the domain is not enumerable. If `complete` is not
    /// provided these values are also used for shell completions.
    fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
        None
    }

    /// Shell completion candidates.
    ///
    /// `None` means not provided; the resolver then falls back to `values`.
    /// May return [`CompleteHandlerResult::Pending`] for slow lookups.
    fn complete(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<CompleteHandlerResult> {
        None
    }
}

/// Object-safe view of a [`Type`] whose output converts into a [`Value`].
///
/// Implemented for every such `Type`; registries store `Arc<dyn ErasedType>`.
pub trait ErasedType: Send + Sync {
    /// Parse into an erased value
    fn parse_value(&self, info: &TypeInfo) -> Result<Value, ValidationError>;

    /// Forwarded `Type::values`
    fn help_values(&self, cmd: &Command, parent: Option<&Command>) -> Option<TypeValues>;

    /// Forwarded `Type::complete`
    fn completions(&self, cmd: &Command, parent: Option<&Command>) -> Option<CompleteHandlerResult>;

    /// Rust name of the typed output, for diagnostics
    fn output_type_name(&self) -> &'static str;
}

impl<T> ErasedType for T
where
    T: Type,
    T::Output: Into<Value>,
{
    fn parse_value(&self, info: &TypeInfo) -> Result<Value, ValidationError> {
        self.parse(info).map(Into::into)
    }

    fn help_values(&self, cmd: &Command, parent: Option<&Command>) -> Option<TypeValues> {
        self.values(cmd, parent)
    }

    fn completions(
        &self,
        cmd: &Command,
        parent: Option<&Command>,
    ) -> Option<CompleteHandlerResult> {
        self.complete(cmd, parent)
    }

    fn output_type_name(&self) -> &'static str {
        std::any::type_name::<T::Output>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Completions;
    use std::sync::Arc;

    struct Bare;

    impl Type for Bare {
        type Output = String;

        fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
            Ok(info.value().to_uppercase())
        }
    }

    struct Listed;

    impl Type for Listed {
        type Output = String;

        fn parse(&self, info: &TypeInfo) -> Result<String, ValidationError> {
            Ok(info.value().to_string())
        }

        fn values(&self, _cmd: &Command, _parent: Option<&Command>) -> Option<TypeValues> {
            Some(Vec::new())
        }

        fn complete(
            &self,
            cmd: &Command,
            _parent: Option<&Command>,
        ) -> Option<CompleteHandlerResult> {
            Some(vec![cmd.name().to_string()].into())
        }
    }

    #[test]
    fn test_optional_methods_default_to_absent() {
        let cmd = Command::new("serve");
        assert!(Bare.values(&cmd, None).is_none());
        assert!(Bare.complete(&cmd, None).is_none());
    }

    #[test]
    fn test_empty_values_is_not_absent() {
        let cmd = Command::new("serve");
        assert_eq!(Listed.values(&cmd, None), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_erased_forwards() {
        let erased: Arc<dyn ErasedType> = Arc::new(Listed);
        let cmd = Command::new("serve");
        let info = TypeInfo::new("Option", "--mode", "mode", "fast");

        assert_eq!(erased.parse_value(&info).unwrap(), Value::from("fast"));
        assert_eq!(erased.help_values(&cmd, None), Some(Vec::new()));
        let completions = erased.completions(&cmd, None).unwrap().resolve().await;
        assert_eq!(completions, Completions::from(vec!["serve"]));
        assert!(erased.output_type_name().ends_with("String"));
    }

    #[test]
    fn test_erased_parse_is_pure() {
        let erased: Arc<dyn ErasedType> = Arc::new(Bare);
        let info = TypeInfo::new("Argument", "word", "word", "abc");
        assert_eq!(erased.parse_value(&info), erased.parse_value(&info.clone()));
    }
}
