//! Integration tests for annotation parsing

use tagrule_grammar::{Directive, GrammarError, Invocation, parse, split_top_level};

fn invoke(name: &str, param: Option<&str>) -> Directive {
    Directive::Invoke(Invocation::new(name, param.map(String::from)))
}

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn nested_commas_stay_in_their_segment() {
    let parts = split_top_level("required, each={min=1,each={max=2,min=0}}, max=9").unwrap();
    assert_eq!(
        parts,
        vec!["required", " each={min=1,each={max=2,min=0}}", " max=9"]
    );
}

#[test]
fn brace_errors_carry_raw_text() {
    let err = parse("min=1,each={").unwrap_err();
    assert_eq!(err, GrammarError::UnclosedBraces("min=1,each={".to_string()));
    assert_eq!(err.source_text(), "min=1,each={");

    let err = parse("each={min=1}}").unwrap_err();
    assert!(matches!(err, GrammarError::UnopenedBraces(_)));
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn full_annotation() {
    let annotation = parse(" required , min = 2 , each = { min=1 , credential } , note= ").unwrap();
    let Directive::Each(clause) = &annotation.directives[2] else {
        panic!("expected each-clause");
    };
    assert_eq!(annotation.directives[0], invoke("required", None));
    assert_eq!(annotation.directives[1], invoke("min", Some("2")));
    assert_eq!(
        clause.directives,
        vec![invoke("min", Some("1")), invoke("credential", None)]
    );
    assert_eq!(annotation.directives[3], invoke("note", Some("")));
}

#[test]
fn canonical_rendering_reparses() {
    let annotation = parse("each={ each={min=1}, max=3 },required,").unwrap();
    let rendered = annotation.to_string();
    assert_eq!(rendered, "each={each={min=1},max=3},required");
    assert_eq!(parse(&rendered).unwrap(), annotation);
}

#[test]
fn inner_brace_errors_surface_from_each() {
    // Balanced overall; the body left after stripping the outer pair is not.
    assert!(matches!(
        parse("each={}{}"),
        Err(GrammarError::UnopenedBraces(_))
    ));
}
