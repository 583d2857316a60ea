//! Build-script hook.
//!
//! Call [`check_package`] from a `build.rs` to reject invalid annotations
//! before the crate compiles:
//!
//! ```no_run
//! fn main() {
//!     if let Err(err) = tagrule_analyzer::build::check_package(".") {
//!         panic!("{err}");
//!     }
//! }
//! ```
//!
//! Setting `TAGRULE_SKIP_CHECK=1` turns the hook into a no-op.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::analyzer::Analyzer;
use crate::config::{AnalyzerConfig, SKIP_ENV};
use crate::diagnostic::Report;
use crate::error::{AnalyzerError, Result};

/// Checks the package at `dir` with the configuration read from the
/// environment, writing cargo directives to stdout.
///
/// Returns `Ok(None)` when the check is skipped.
///
/// # Errors
/// Returns [`AnalyzerError::InvalidTags`] if any diagnostic is found, or
/// any scan error.
pub fn check_package(dir: impl AsRef<Path>) -> Result<Option<Report>> {
    let stdout = io::stdout();
    check_package_with(dir, &AnalyzerConfig::from_env(), &mut stdout.lock())
}

/// Checks the package at `dir`, writing cargo directives to `out`.
///
/// Every diagnostic becomes a `cargo:warning` line.
///
/// # Errors
/// Same as [`check_package`], plus [`AnalyzerError::Output`] if `out`
/// cannot be written.
pub fn check_package_with(
    dir: impl AsRef<Path>,
    config: &AnalyzerConfig,
    out: &mut impl Write,
) -> Result<Option<Report>> {
    let dir = dir.as_ref();
    writeln!(out, "cargo:rerun-if-env-changed={SKIP_ENV}").map_err(AnalyzerError::Output)?;
    if config.skip {
        info!("{SKIP_ENV} is set, skipping tag validation");
        return Ok(None);
    }
    writeln!(out, "cargo:rerun-if-changed={}", dir.display()).map_err(AnalyzerError::Output)?;

    let report = Analyzer::with_config(config.clone()).analyze(dir)?;
    for diagnostic in &report.diagnostics {
        writeln!(out, "cargo:warning={diagnostic}").map_err(AnalyzerError::Output)?;
    }
    if report.is_clean() {
        Ok(Some(report))
    } else {
        Err(AnalyzerError::InvalidTags(report.error_count()))
    }
}
