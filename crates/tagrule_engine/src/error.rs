//! Error types for validation.
//!
//! There are three layers: [`RuleError`] is what a validator callback
//! returns, [`FieldError`] is the raw failure of one field handed to the
//! formatter, and [`Error`] is what [`crate::Validator::validate`] returns.

use std::num::ParseIntError;

use tagrule_grammar::GrammarError;
use thiserror::Error;

use crate::value::Kind;

/// Boxed error type accepted from user code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by one validator callback.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The value does not satisfy the rule.
    #[error("{0}")]
    Violation(String),

    /// The parameter could not be interpreted.
    #[error("{validator} expects integer param, got {param:?}: {source}")]
    BadParameter {
        /// Name of the validator.
        validator: String,
        /// Raw parameter text.
        param: String,
        /// The parse failure.
        source: ParseIntError,
    },

    /// The validator cannot be applied to this kind of value.
    #[error("{validator} is not applicable to type {kind}")]
    NotApplicable {
        /// Name of the validator.
        validator: String,
        /// Kind of the offending value.
        kind: Kind,
    },

    /// Any other error raised by a custom validator.
    #[error(transparent)]
    Custom(BoxError),
}

impl RuleError {
    /// Creates a violation with the given message.
    #[must_use]
    pub fn violation(message: impl Into<String>) -> Self {
        Self::Violation(message.into())
    }

    /// Wraps an arbitrary error.
    #[must_use]
    pub fn custom(error: impl Into<BoxError>) -> Self {
        Self::Custom(error.into())
    }
}

/// Raw failure of one field, before formatting.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The field's annotation does not parse.
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// An each-clause was attached to a non-sequence field.
    #[error("each can be used only with list or array, got {kind}")]
    NotASequence {
        /// Kind of the offending value.
        kind: Kind,
    },

    /// A validator rejected the value.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Error returned by [`crate::Validator::validate`].
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a record.
    #[error("unsupported input type {kind}: expected a record")]
    UnsupportedInput {
        /// Kind of the input after resolving one optional level.
        kind: Kind,
    },

    /// A field failed validation.
    #[error("{message}")]
    Field {
        /// Field path, such as `Names[1]`.
        path: String,
        /// Formatted message.
        message: String,
        /// The raw failure.
        #[source]
        source: FieldError,
    },

    /// Error produced by a custom formatter.
    #[error(transparent)]
    Custom(BoxError),
}

impl Error {
    /// Wraps an arbitrary error.
    #[must_use]
    pub fn custom(error: impl Into<BoxError>) -> Self {
        Self::Custom(error.into())
    }

    /// Returns the failing field path, if the error concerns a field.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Field { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Returns the raw field failure, if any.
    #[must_use]
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}
