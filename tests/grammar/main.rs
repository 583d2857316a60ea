//! Integration tests for Layer 0: Grammar
//!
//! Both consumers must agree on the grammar, so these tests drive the
//! runtime engine and the static analyzer with the same annotations.

mod agreement;
mod parsing;
