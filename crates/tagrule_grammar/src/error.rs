//! Grammar errors.
//!
//! Brace-balance problems are the only way an annotation can fail to parse;
//! everything else (unknown names, bad parameters) is a semantic concern of
//! the consumer.

use thiserror::Error;

/// Result alias for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// A brace-balance failure, carrying the raw text that was being split.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// More `{` than `}` by the end of the text.
    #[error("unclosed braces in {0:?}")]
    UnclosedBraces(String),

    /// A `}` appeared with no matching `{` before it.
    #[error("unopened braces in {0:?}")]
    UnopenedBraces(String),
}

impl GrammarError {
    /// Returns the raw text that failed to split.
    #[must_use]
    pub fn source_text(&self) -> &str {
        match self {
            Self::UnclosedBraces(text) | Self::UnopenedBraces(text) => text,
        }
    }
}
