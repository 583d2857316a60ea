//! Static analyzer for tagrule field annotations.
//!
//! Scans a package's Rust sources without running them and reports every
//! malformed or unknown annotation, so mistakes surface before any record
//! is validated at runtime. The annotation grammar is the same crate the
//! runtime engine uses.
//!
//! This crate provides:
//! - [`Analyzer`] - The two-pass package scan
//! - [`check_annotation`] - Semantic checks on one annotation string
//! - [`Diagnostic`] and [`Report`] - Scan results
//! - [`AnalyzerConfig`] - Attribute name, discovery, and exclusion settings
//! - [`build`] - Hook for `build.rs`
//!
//! The `tagrule-check` binary wraps [`Analyzer`] for command-line use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod build;
pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod sources;


pub use analyzer::Analyzer;
pub use check::check_annotation;
pub use config::{AnalyzerConfig, SKIP_ENV};
pub use diagnostic::{Diagnostic, Report};
pub use error::{AnalyzerError, Result};
