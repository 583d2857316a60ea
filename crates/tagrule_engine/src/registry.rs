//! Registry of validators.
//!
//! Stores validator callbacks by name. Every [`crate::Validator`] owns its
//! own registry; there is no global table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::context::FieldContext;
use crate::error::RuleError;

// =============================================================================
// TagValidator
// =============================================================================

/// A named validation rule.
///
/// Implemented for every `Fn(&FieldContext) -> Result<(), RuleError>`
/// closure, so most validators are registered as closures.
pub trait TagValidator: Send + Sync {
    /// Checks the field described by `ctx`.
    ///
    /// # Errors
    /// Returns a [`RuleError`] when the value does not satisfy the rule.
    fn validate(&self, ctx: &FieldContext<'_>) -> Result<(), RuleError>;
}

impl<F> TagValidator for F
where
    F: Fn(&FieldContext<'_>) -> Result<(), RuleError> + Send + Sync,
{
    fn validate(&self, ctx: &FieldContext<'_>) -> Result<(), RuleError> {
        self(ctx)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registry for storing and looking up validators by name.
#[derive(Clone, Default)]
pub struct Registry {
    /// Map from validator name to callback.
    validators: HashMap<String, Arc<dyn TagValidator>>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with `min`, `minimum`, `max`, `maximum`, and
    /// `required` pre-registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::builtins::register_builtins(&mut registry);
        registry
    }

    /// Registers a closure under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&FieldContext<'_>) -> Result<(), RuleError> + Send + Sync + 'static,
    {
        self.register_validator(name, callback);
    }

    /// Registers a [`TagValidator`] under `name`, replacing any previous
    /// entry.
    pub fn register_validator<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: TagValidator + 'static,
    {
        let name = name.into();
        if self.validators.insert(name.clone(), Arc::new(validator)).is_some() {
            debug!(validator = %name, "replaced registered validator");
        } else {
            debug!(validator = %name, "registered validator");
        }
    }

    /// Looks up a validator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn TagValidator> {
        self.validators.get(name).map(AsRef::as_ref)
    }

    /// Checks if a validator is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Returns all registered names, in no particular order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.validators.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names();
        names.sort_unstable();
        f.debug_struct("Registry").field("validators", &names).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
