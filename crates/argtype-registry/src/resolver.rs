//! Resolver: binds declarations to registered types
//!
//! Parsing goes `resolve -> build TypeInfo -> parse` and is synchronous.
//! Help values and completions go `resolve -> values | complete`; completion
//! may await a pending computation. The resolver owns the completion fallback:
//! a type without `complete` is completed from its `values`, and a type with
//! neither completes to nothing.

use crate::{Declaration, SharedType, TypeRegistry};
use argtype_diagnostics::{ArgTypeError, ConfigurationError};
use argtype_types::{Command, Completions, ErasedType, TypeInfo, TypeValues, Value};
use log::{debug, trace};
use std::sync::Arc;

/// Parses values and gathers help values and completions for declarations
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Arc<TypeRegistry>,
}

impl Resolver {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Share an existing registry
    pub fn from_shared(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Resolve the declaration's type and describe `raw` for it
    pub fn type_info(
        &self,
        decl: &Declaration,
        raw: &str,
    ) -> Result<(SharedType, TypeInfo), ConfigurationError> {
        let (type_name, ty) = self.registry.resolve_declared(decl.type_name())?;
        let info = TypeInfo::new(decl.label(), decl.name(), type_name, raw);
        Ok((ty, info))
    }

    /// Parse one raw value for a declaration
    pub fn parse(&self, decl: &Declaration, raw: &str) -> Result<Value, ArgTypeError> {
        let (ty, info) = self.type_info(decl, raw)?;
        trace!("parsing {}", info);
        let value = ty.parse_value(&info)?;
        Ok(value)
    }

    /// Parse every `(declaration, raw value)` pair.
    ///
    /// All pairs are attempted. If any fail, the result carries one error per
    /// failed pair, in input order.
    pub fn parse_all<'a, I>(&self, items: I) -> Result<Vec<Value>, ArgTypeError>
    where
        I: IntoIterator<Item = (&'a Declaration, &'a str)>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for (decl, raw) in items {
            match self.parse(decl, raw) {
                Ok(value) => values.push(value),
                Err(err) => {
                    debug!("{} rejected \"{}\": {}", decl, raw, err);
                    errors.push(err);
                }
            }
        }
        match errors.len() {
            0 => Ok(values),
            1 => Err(errors.remove(0)),
            _ => Err(ArgTypeError::Multiple(errors)),
        }
    }

    /// Help values for the declaration's type; `None` when the type has none
    pub fn values(
        &self,
        decl: &Declaration,
        cmd: &Command,
        parent: Option<&Command>,
    ) -> Result<Option<TypeValues>, ConfigurationError> {
        let (_, ty) = self.registry.resolve_declared(decl.type_name())?;
        Ok(ty.help_values(cmd, parent))
    }

    /// Completion candidates for the declaration's type
    pub async fn complete(
        &self,
        decl: &Declaration,
        cmd: &Command,
        parent: Option<&Command>,
    ) -> Result<Completions, ConfigurationError> {
        let (_, ty) = self.registry.resolve_declared(decl.type_name())?;
        Ok(effective_completions(ty.as_ref(), cmd, parent).await)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(TypeRegistry::with_builtins())
    }
}

/// Completion candidates for a type, falling back to its help values.
///
/// `complete` wins when provided, even if it yields nothing. Without it the
/// help values are used; without either the result is empty.
pub async fn effective_completions(
    ty: &dyn ErasedType,
    cmd: &Command,
    parent: Option<&Command>,
) -> Completions {
    if let Some(result) = ty.completions(cmd, parent) {
        return result.resolve().await;
    }
    match ty.help_values(cmd, parent) {
        Some(values) => Completions::Plain(values),
        None => Completions::empty(),
    }
}
