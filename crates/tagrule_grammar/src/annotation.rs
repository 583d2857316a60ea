//! Parsed annotations.
//!
//! An [`Annotation`] is the ordered list of top-level [`Directive`]s in one
//! field's tag. A directive is either a plain validator [`Invocation`] or an
//! [`EachClause`], which carries its own nested directive list.

use std::fmt;

use crate::error::Result;
use crate::names;
use crate::scanner::split_top_level;

/// One named validator reference with an optional parameter.
///
/// `param` is `None` when the segment has no `=`, and `Some("")` when it
/// has an `=` followed by nothing. The two are distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Validator name, trimmed. May be empty (`"=5"`).
    pub name: String,
    /// Parameter text after the first `=`, trimmed.
    pub param: Option<String>,
}

impl Invocation {
    /// Creates a new invocation.
    #[must_use]
    pub fn new(name: impl Into<String>, param: Option<String>) -> Self {
        Self {
            name: name.into(),
            param,
        }
    }

    /// Splits one trimmed segment on its first `=`.
    fn from_segment(segment: &str) -> Self {
        match segment.split_once('=') {
            Some((name, param)) => Self::new(name.trim(), Some(param.trim().to_string())),
            None => Self::new(segment.trim(), None),
        }
    }

    /// Returns the parameter as a string slice, if present.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}={param}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// The reserved `each` directive: inner directives applied to every element
/// of a sequence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EachClause {
    /// Directives applied to each element, in source order.
    pub directives: Vec<Directive>,
}

impl fmt::Display for EachClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={{", names::EACH)?;
        write_joined(f, &self.directives)?;
        f.write_str("}")
    }
}

/// One top-level unit of an annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// A validator invocation.
    Invoke(Invocation),
    /// A nested each-clause.
    Each(EachClause),
}

impl Directive {
    /// Returns the directive's name (`each` for each-clauses).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Invoke(invocation) => &invocation.name,
            Self::Each(_) => names::EACH,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke(invocation) => fmt::Display::fmt(invocation, f),
            Self::Each(clause) => fmt::Display::fmt(clause, f),
        }
    }
}

/// A parsed annotation string.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Annotation {
    /// Top-level directives in source order.
    pub directives: Vec<Directive>,
}

impl Annotation {
    /// Returns true if the annotation has no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Returns the number of top-level directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Iterates the top-level directives in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }
}

impl<'a> IntoIterator for &'a Annotation {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.directives)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, directives: &[Directive]) -> fmt::Result {
    for (i, directive) in directives.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        fmt::Display::fmt(directive, f)?;
    }
    Ok(())
}

/// Parses an annotation string.
///
/// Blank segments (trailing commas, empty input) are skipped. The body of an
/// `each` directive is parsed recursively after one optional outer `{ }` pair
/// is stripped.
///
/// # Errors
/// Returns a [`crate::GrammarError`] when braces are unbalanced at the top
/// level or inside any each-clause body.
///
/// ```
/// use tagrule_grammar::{Directive, parse};
///
/// let annotation = parse("required, each={min=1,max=5}").unwrap();
/// assert_eq!(annotation.len(), 2);
/// assert!(matches!(annotation.directives[1], Directive::Each(_)));
/// ```
pub fn parse(tag: &str) -> Result<Annotation> {
    Ok(Annotation {
        directives: parse_directives(tag)?,
    })
}

fn parse_directives(source: &str) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();
    for segment in split_top_level(source)? {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let invocation = Invocation::from_segment(segment);
        if invocation.name == names::EACH {
            let body = invocation.param().map_or("", strip_braces);
            directives.push(Directive::Each(EachClause {
                directives: parse_directives(body)?,
            }));
        } else {
            directives.push(Directive::Invoke(invocation));
        }
    }
    Ok(directives)
}

/// Strips one outer `{ }` pair, if the whole text is wrapped in one.
fn strip_braces(param: &str) -> &str {
    let param = param.trim();
    if param.len() >= 2 && param.starts_with('{') && param.ends_with('}') {
        param[1..param.len() - 1].trim()
    } else {
        param
    }
}
