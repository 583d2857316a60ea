//! Analyzer errors.
//!
//! These abort a scan. Problems found inside annotations are not errors;
//! they are collected as [`crate::Diagnostic`]s.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// A failure that stops the scan.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {}: {message}", path.display())]
    Syntax {
        /// The offending file.
        path: PathBuf,
        /// Parser message with position.
        message: String,
    },

    /// The package path is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The scan completed and found invalid annotations.
    #[error("found {0} tag validation errors")]
    InvalidTags(usize),

    /// Writing build-script output failed.
    #[error("failed to write build output: {0}")]
    Output(#[source] io::Error),
}

impl AnalyzerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
