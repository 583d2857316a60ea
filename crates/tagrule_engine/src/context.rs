//! The accessor bundle handed to validator callbacks.

use crate::format::FieldMeta;
use crate::value::Value;

/// Read-only view of the field (or element) being validated.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    value: &'a Value<'a>,
    param: Option<&'a str>,
    validator: &'a str,
    meta: &'a FieldMeta<'a>,
}

impl<'a> FieldContext<'a> {
    /// Creates a context.
    #[must_use]
    pub const fn new(
        value: &'a Value<'a>,
        param: Option<&'a str>,
        validator: &'a str,
        meta: &'a FieldMeta<'a>,
    ) -> Self {
        Self {
            value,
            param,
            validator,
            meta,
        }
    }

    /// The value being validated.
    #[must_use]
    pub const fn value(&self) -> &'a Value<'a> {
        self.value
    }

    /// The value with one level of optional resolved.
    #[must_use]
    pub fn resolved(&self) -> &'a Value<'a> {
        self.value.resolve()
    }

    /// The text of the value, if it is (an optional holding) text.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.resolved().as_str()
    }

    /// The length of the resolved value, if it has one.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        self.resolved().length()
    }

    /// The validator's parameter.
    ///
    /// # Panics
    /// Panics if the invocation has no `=`. Validators that take a parameter
    /// must be invoked with one.
    #[must_use]
    pub fn param(&self) -> &'a str {
        match self.param {
            Some(param) => param,
            None => panic!(
                "missing parameter for validator {:?} on field {:?}",
                self.validator,
                self.meta.path()
            ),
        }
    }

    /// The validator's parameter, if one was given.
    #[must_use]
    pub const fn try_param(&self) -> Option<&'a str> {
        self.param
    }

    /// The name the validator was invoked under.
    #[must_use]
    pub const fn validator_name(&self) -> &'a str {
        self.validator
    }

    /// The declared field name.
    #[must_use]
    pub const fn field_name(&self) -> &'a str {
        self.meta.name
    }

    /// The field path including element indices.
    #[must_use]
    pub fn path(&self) -> String {
        self.meta.path()
    }

    /// Full field metadata.
    #[must_use]
    pub const fn meta(&self) -> &'a FieldMeta<'a> {
        self.meta
    }
}
