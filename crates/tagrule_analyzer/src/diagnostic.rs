//! Diagnostics and scan reports.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One problem found in one field annotation.
///
/// Ordering is by file, then line, then column.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source file containing the field.
    pub file: PathBuf,
    /// 1-based line of the field.
    pub line: usize,
    /// 1-based column of the field.
    pub column: usize,
    /// Name of the struct declaring the field.
    pub record: String,
    /// Field name (`0`, `1`, ... for tuple structs).
    pub field: String,
    /// Raw annotation text.
    pub annotation: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: tag error in field {:?}: {} (tag: {:?})",
            self.file.display(),
            self.line,
            self.column,
            self.field,
            self.message,
            self.annotation
        )
    }
}

/// Outcome of one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Number of source files analyzed.
    pub files_scanned: usize,
    /// Custom validator names discovered, sorted.
    pub custom_validators: Vec<String>,
    /// Every diagnostic, sorted.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Returns true if no diagnostics were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}
