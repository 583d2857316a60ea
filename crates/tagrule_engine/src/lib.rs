//! Validator registry, built-in validators, and the runtime validation
//! engine for tagrule.
//!
//! This crate provides:
//! - [`Value`] and [`AsValue`] - Read-only views over field values
//! - [`Record`] - Derive macro adapting a struct into a record view
//! - [`Registry`] and [`TagValidator`] - Named validator callbacks
//! - [`builtins`] - `min`, `minimum`, `max`, `maximum`, `required`
//! - [`Validator`] - Runs annotations against a record
//! - [`ErrorFormatter`] - Turns raw field failures into returned errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod context;
pub mod error;
pub mod format;
pub mod registry;
pub mod validator;
pub mod value;


pub use context::FieldContext;
pub use error::{BoxError, Error, FieldError, Result, RuleError};
pub use format::{DefaultFormatter, ErrorFormatter, FieldMeta};
pub use registry::{Registry, TagValidator};
pub use tagrule_derive::Record;
pub use validator::Validator;
pub use value::{AsValue, Field, Kind, RecordView, Value};
