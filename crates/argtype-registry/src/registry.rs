//! Type registry
//!
//! Maps type names to shared type instances. Names are unique: a second
//! registration under a taken name is a configuration error unless it goes
//! through `register_override`. The registry is built up front and then
//! shared read-only, so lookups need no locking.

use argtype_diagnostics::ConfigurationError;
use argtype_types::{BooleanType, ErasedType, IntegerType, NumberType, StringType};
use indexmap::IndexMap;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased value type
pub type SharedType = Arc<dyn ErasedType>;

/// Registry of value types keyed by name
#[derive(Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, SharedType>,
}

impl TypeRegistry {
    /// Type used by declarations that name no type
    pub const DEFAULT_TYPE: &'static str = "string";

    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `number`, `integer`, `boolean` and `string`
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert("number", Arc::new(NumberType));
        registry.insert("integer", Arc::new(IntegerType));
        registry.insert("boolean", Arc::new(BooleanType));
        registry.insert(Self::DEFAULT_TYPE, Arc::new(StringType));
        registry
    }

    /// Register a type under a new name
    pub fn register<T>(
        &mut self,
        name: impl Into<String>,
        ty: T,
    ) -> Result<&mut Self, ConfigurationError>
    where
        T: ErasedType + 'static,
    {
        self.register_shared(name, Arc::new(ty))
    }

    /// Register an already shared type under a new name
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        ty: SharedType,
    ) -> Result<&mut Self, ConfigurationError> {
        let name = validate_name(name.into())?;
        if self.types.contains_key(&name) {
            return Err(ConfigurationError::DuplicateType { name });
        }
        self.insert(name, ty);
        Ok(self)
    }

    /// Register a type, replacing any type already under that name
    pub fn register_override<T>(
        &mut self,
        name: impl Into<String>,
        ty: T,
    ) -> Result<&mut Self, ConfigurationError>
    where
        T: ErasedType + 'static,
    {
        let name = validate_name(name.into())?;
        if self.types.contains_key(&name) {
            warn!("replacing registered type \"{}\"", name);
        }
        self.insert(name, Arc::new(ty));
        Ok(self)
    }

    fn insert(&mut self, name: impl Into<String>, ty: SharedType) {
        let name = name.into();
        debug!("registering type \"{}\" -> {}", name, ty.output_type_name());
        self.types.insert(name, ty);
    }

    /// Get a type by name
    pub fn get(&self, name: &str) -> Option<&SharedType> {
        self.types.get(name)
    }

    /// Check if a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up a type, failing with the list of known names
    pub fn resolve(&self, name: &str) -> Result<SharedType, ConfigurationError> {
        match self.types.get(name) {
            Some(ty) => {
                debug!("resolved type \"{}\"", name);
                Ok(Arc::clone(ty))
            }
            None => Err(ConfigurationError::UnknownType {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Look up the declared type, or the default type when none is declared.
    ///
    /// Returns the effective type name together with the type.
    pub fn resolve_declared<'a>(
        &self,
        type_name: Option<&'a str>,
    ) -> Result<(&'a str, SharedType), ConfigurationError> {
        let name = type_name.unwrap_or(Self::DEFAULT_TYPE);
        self.resolve(name).map(|ty| (name, ty))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

fn validate_name(name: String) -> Result<String, ConfigurationError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ConfigurationError::InvalidTypeName { name });
    }
    Ok(name)
}
