//! Semantic checks on one annotation.
//!
//! The annotation is parsed by the shared grammar, then every directive
//! (including those nested in each-clauses) is checked against the
//! built-in names and the discovered custom validators.

use std::collections::BTreeSet;

use tagrule_grammar::{Directive, Invocation, names};

/// Built-in validators known to the analyzer. `each` is a directive, and
/// `dive` is reserved without an implementation.
pub const BUILTINS: &[&str] = &[
    names::REQUIRED,
    names::MIN,
    names::MINIMUM,
    names::MAX,
    names::MAXIMUM,
];

/// Checks one raw annotation and returns a message per problem found.
///
/// A grammar error is the only message when the annotation does not parse.
///
/// ```
/// use std::collections::BTreeSet;
/// use tagrule_analyzer::check_annotation;
///
/// let custom = BTreeSet::from(["credential".to_string()]);
/// assert!(check_annotation("each={min=1,credential}", &custom).is_empty());
/// assert_eq!(
///     check_annotation("each:{}", &custom),
///     vec![r#"invalid syntax "each:{}" - did you mean "each={}"?"#]
/// );
/// ```
#[must_use]
pub fn check_annotation(tag: &str, custom: &BTreeSet<String>) -> Vec<String> {
    match tagrule_grammar::parse(tag) {
        Ok(annotation) => {
            let mut messages = Vec::new();
            check_directives(&annotation.directives, custom, &mut messages);
            messages
        }
        Err(err) => vec![err.to_string()],
    }
}

fn check_directives(directives: &[Directive], custom: &BTreeSet<String>, out: &mut Vec<String>) {
    for directive in directives {
        match directive {
            Directive::Each(clause) => check_directives(&clause.directives, custom, out),
            Directive::Invoke(invocation) => out.extend(check_invocation(invocation, custom)),
        }
    }
}

fn check_invocation(invocation: &Invocation, custom: &BTreeSet<String>) -> Option<String> {
    let name = invocation.name.as_str();
    if name.is_empty() {
        return Some("empty validator name".to_string());
    }

    if !BUILTINS.contains(&name) && !custom.contains(name) {
        let segment = invocation.to_string();
        return Some(match segment.strip_prefix("each:") {
            Some(rest) => format!("invalid syntax {segment:?} - did you mean \"each={rest}\"?"),
            None => format!("unknown validator {name:?}"),
        });
    }

    if names::BOUNDS.contains(&name) {
        return match invocation.param() {
            None => Some(format!("{name} expects integer parameter, got none")),
            Some(param) if param.parse::<i64>().is_err() => {
                Some(format!("{name} expects integer parameter, got {param:?}"))
            }
            Some(_) => None,
        };
    }

    if name == names::REQUIRED && invocation.param().is_some() {
        return Some("required validator does not accept parameters".to_string());
    }

    None
}
