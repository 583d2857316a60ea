//! The runtime validation engine.
//!
//! [`Validator::validate`] walks the fields of a record in declaration
//! order, parses each field's annotation, and runs the named validators
//! against the field value. The first failure is formatted and returned.

use std::fmt;
use std::sync::Arc;

use tagrule_grammar::{Directive, Invocation};
use tracing::trace;

use crate::context::FieldContext;
use crate::error::{Error, FieldError, Result, RuleError};
use crate::format::{DefaultFormatter, ErrorFormatter, FieldMeta};
use crate::registry::{Registry, TagValidator};
use crate::value::{AsValue, RecordView, Value};

/// Validates records against their field annotations.
///
/// Registration and formatter changes take `&mut self`; validation takes
/// `&self`, so a shared `Validator` can be used from many threads at once.
///
/// ```
/// use tagrule_engine::{Record, Validator};
///
/// #[derive(Record)]
/// struct User {
///     #[tag("min=2,max=4")]
///     name: String,
/// }
///
/// let validator = Validator::new();
/// assert!(validator.validate(&User { name: "john".into() }).is_ok());
/// assert!(validator.validate(&User { name: "J".into() }).is_err());
/// ```
#[derive(Clone)]
pub struct Validator {
    registry: Registry,
    formatter: Arc<dyn ErrorFormatter>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Creates a validator with the built-in validators registered and the
    /// default formatter installed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Registry::with_builtins())
    }

    /// Creates a validator over an existing registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            formatter: Arc::new(DefaultFormatter),
        }
    }

    /// Replaces the formatter, builder style.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ErrorFormatter + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Replaces the formatter used by [`Validator::validate`].
    pub fn set_formatter(&mut self, formatter: impl ErrorFormatter + 'static) {
        self.formatter = Arc::new(formatter);
    }

    /// Registers a closure under `name`, replacing any previous entry
    /// (built-ins included).
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&FieldContext<'_>) -> std::result::Result<(), RuleError> + Send + Sync + 'static,
    {
        self.registry.register(name, callback);
    }

    /// Registers a [`TagValidator`] under `name`, replacing any previous
    /// entry.
    pub fn register_validator<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: TagValidator + 'static,
    {
        self.registry.register_validator(name, validator);
    }

    /// Returns the names of all registered validators, in no particular
    /// order.
    #[must_use]
    pub fn validators(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Returns the underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validates `input` using the installed formatter.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedInput`] if `input` is not a record (after
    /// resolving one optional level), otherwise the formatted error of the
    /// first failing field.
    pub fn validate<T: AsValue + ?Sized>(&self, input: &T) -> Result<()> {
        self.validate_with(input, self.formatter.as_ref())
    }

    /// Validates `input`, formatting failures with `formatter` instead of
    /// the installed one.
    ///
    /// # Errors
    /// Same as [`Validator::validate`].
    pub fn validate_with<T: AsValue + ?Sized>(
        &self,
        input: &T,
        formatter: &dyn ErrorFormatter,
    ) -> Result<()> {
        let value = input.as_value();
        let Value::Record(record) = value.resolve() else {
            return Err(Error::UnsupportedInput {
                kind: value.resolve().kind(),
            });
        };
        self.validate_record(record, formatter)
    }

    fn validate_record(
        &self,
        record: &RecordView<'_>,
        formatter: &dyn ErrorFormatter,
    ) -> Result<()> {
        for field in &record.fields {
            let Some(annotation) = field.annotation else {
                continue;
            };
            let meta = FieldMeta::new(record.name, field.name, annotation);
            let parsed = match tagrule_grammar::parse(annotation) {
                Ok(parsed) => parsed,
                Err(err) => return Err(formatter.format(&meta, &field.value, err.into())),
            };
            self.apply(&parsed.directives, &field.value, &meta, formatter)?;
        }
        Ok(())
    }

    fn apply(
        &self,
        directives: &[Directive],
        value: &Value<'_>,
        meta: &FieldMeta<'_>,
        formatter: &dyn ErrorFormatter,
    ) -> Result<()> {
        for directive in directives {
            match directive {
                Directive::Each(clause) => {
                    let Some(elements) = value.elements() else {
                        let error = FieldError::NotASequence { kind: value.kind() };
                        return Err(formatter.format(meta, value, error));
                    };
                    for (index, element) in elements.iter().enumerate() {
                        let element_meta = meta.element(index);
                        self.apply(&clause.directives, element, &element_meta, formatter)?;
                    }
                }
                Directive::Invoke(invocation) => {
                    self.invoke(invocation, value, meta, formatter)?;
                }
            }
        }
        Ok(())
    }

    fn invoke(
        &self,
        invocation: &Invocation,
        value: &Value<'_>,
        meta: &FieldMeta<'_>,
        formatter: &dyn ErrorFormatter,
    ) -> Result<()> {
        let Some(validator) = self.registry.get(&invocation.name) else {
            trace!(validator = %invocation.name, field = %meta, "skipping unknown validator");
            return Ok(());
        };
        let ctx = FieldContext::new(value, invocation.param(), &invocation.name, meta);
        validator
            .validate(&ctx)
            .map_err(|err| formatter.format(meta, value, err.into()))
    }
}
