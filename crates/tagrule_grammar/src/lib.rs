//! Annotation grammar for tagrule.
//!
//! Both the runtime engine and the static analyzer parse field annotations
//! through this crate, so they always agree on what is valid grammar.
//!
//! ```text
//! tag        := segment ("," segment)*
//! segment    := name ["=" param]
//! param      := text | "{" tag "}"          (only meaningful when name == "each")
//! name       := non-empty token, no "=" or ","
//! ```
//!
//! This crate provides:
//! - [`split_top_level`] - Brace-aware comma splitting
//! - [`parse`] - Parsing an annotation into [`Directive`]s
//! - [`GrammarError`] - Brace-balance failures
//! - [`names`] - Reserved validator names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod error;
pub mod names;
pub mod scanner;


pub use annotation::{Annotation, Directive, EachClause, Invocation, parse};
pub use error::{GrammarError, Result};
pub use scanner::split_top_level;
