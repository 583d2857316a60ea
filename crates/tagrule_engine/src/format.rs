//! Turning raw field failures into returned errors.
//!
//! A [`crate::Validator`] owns one [`ErrorFormatter`] (the
//! [`DefaultFormatter`] unless replaced), and a different one can be passed
//! for a single call with [`crate::Validator::validate_with`].

use std::fmt;

use crate::error::{Error, FieldError};
use crate::value::Value;

/// Where a failure happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMeta<'a> {
    /// Type name of the record.
    pub record: &'a str,
    /// Declared field name.
    pub name: &'a str,
    /// Raw annotation of the field.
    pub annotation: &'a str,
    /// Element indices, outermost first, when the failure is inside an
    /// each-clause.
    pub indices: Vec<usize>,
}

impl<'a> FieldMeta<'a> {
    /// Creates metadata for a whole field.
    #[must_use]
    pub const fn new(record: &'a str, name: &'a str, annotation: &'a str) -> Self {
        Self {
            record,
            name,
            annotation,
            indices: Vec::new(),
        }
    }

    /// Returns metadata for one element of this field.
    #[must_use]
    pub fn element(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            indices,
            ..*self
        }
    }

    /// Renders the field path, e.g. `Names[0][2]`.
    #[must_use]
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldMeta<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for index in &self.indices {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Converts a raw field failure into the error returned to the caller.
pub trait ErrorFormatter: Send + Sync {
    /// Builds the error for `field`, whose current (element) value is
    /// `value`.
    fn format(&self, field: &FieldMeta<'_>, value: &Value<'_>, error: FieldError) -> Error;
}

/// The formatter used unless another is installed.
///
/// Produces `field "Name" validation error: <raw error> (received: '<value>')`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFormatter;

impl ErrorFormatter for DefaultFormatter {
    fn format(&self, field: &FieldMeta<'_>, value: &Value<'_>, error: FieldError) -> Error {
        let path = field.path();
        Error::Field {
            message: format!("field {path:?} validation error: {error} (received: '{value}')"),
            path,
            source: error,
        }
    }
}

/// A formatter backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnFormatter<F>(F);

impl<F> fmt::Debug for FnFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFormatter")
    }
}

impl<F> ErrorFormatter for FnFormatter<F>
where
    F: Fn(&FieldMeta<'_>, &Value<'_>, FieldError) -> Error + Send + Sync,
{
    fn format(&self, field: &FieldMeta<'_>, value: &Value<'_>, error: FieldError) -> Error {
        (self.0)(field, value, error)
    }
}

/// Creates a formatter from a closure.
///
/// ```
/// use tagrule_engine::{Error, format};
///
/// let formatter = format::from_fn(|field, _value, error| {
///     Error::custom(format!("{}: {error}", field.path()))
/// });
/// # let _ = formatter;
/// ```
#[must_use]
pub const fn from_fn<F>(f: F) -> FnFormatter<F>
where
    F: Fn(&FieldMeta<'_>, &Value<'_>, FieldError) -> Error + Send + Sync,
{
    FnFormatter(f)
}
