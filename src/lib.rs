//! tagrule - Field annotation validation
//!
//! This crate re-exports all layers of the tagrule system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tagrule_analyzer - Static tag analyzer, build hook, tagrule-check CLI
//!          tagrule_engine   - Registry, built-ins, runtime validation engine
//! Layer 1: tagrule_derive   - #[derive(Record)] value views
//! Layer 0: tagrule_grammar  - Annotation grammar shared by every consumer
//! ```

pub use tagrule_analyzer as analyzer;
pub use tagrule_engine as engine;
pub use tagrule_grammar as grammar;

pub use tagrule_engine::{Record, Validator};
