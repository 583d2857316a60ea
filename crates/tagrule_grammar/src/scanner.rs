//! Brace-aware segment scanner.
//!
//! The scanner walks an annotation left to right, tracking brace depth, and
//! cuts it at every comma that sits at depth zero.

use crate::error::{GrammarError, Result};

/// Scanner over one annotation (or one nested each-clause body).
pub struct Scanner<'src> {
    /// Source text being scanned.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Byte offset where the current segment starts.
    segment_start: usize,
    /// Current brace depth.
    depth: i32,
    /// Set once the depth has dropped below zero.
    went_negative: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            segment_start: 0,
            depth: 0,
            went_negative: false,
        }
    }

    /// Scans the whole source and returns its top-level segments.
    ///
    /// Segments are returned untrimmed and may be empty.
    ///
    /// # Errors
    /// [`GrammarError::UnopenedBraces`] if the depth went negative at any
    /// point, otherwise [`GrammarError::UnclosedBraces`] if it ends above zero.
    pub fn segments(mut self) -> Result<Vec<&'src str>> {
        let source = self.source;
        let mut parts = Vec::new();
        while let Some(c) = self.peek_char() {
            match c {
                '{' => self.depth += 1,
                '}' => {
                    self.depth -= 1;
                    if self.depth < 0 {
                        self.went_negative = true;
                    }
                }
                ',' if self.depth == 0 => {
                    parts.push(&source[self.segment_start..self.position]);
                    self.segment_start = self.position + 1;
                }
                _ => {}
            }
            self.advance(c);
        }
        parts.push(&source[self.segment_start..]);

        if self.went_negative {
            Err(GrammarError::UnopenedBraces(source.to_string()))
        } else if self.depth > 0 {
            Err(GrammarError::UnclosedBraces(source.to_string()))
        } else {
            Ok(parts)
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advances past `c`.
    fn advance(&mut self, c: char) {
        self.position += c.len_utf8();
    }
}

/// Splits `source` on commas that are not nested inside braces.
///
/// # Errors
/// Returns a [`GrammarError`] when the braces in `source` are unbalanced.
///
/// ```
/// use tagrule_grammar::split_top_level;
///
/// let parts = split_top_level("min=1,each={min=1,max=5}").unwrap();
/// assert_eq!(parts, vec!["min=1", "each={min=1,max=5}"]);
/// ```
pub fn split_top_level(source: &str) -> Result<Vec<&str>> {
    Scanner::new(source).segments()
}
