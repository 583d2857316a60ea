//! The runtime engine and the analyzer see the same grammar

use std::collections::BTreeSet;

use tagrule_analyzer::check_annotation;
use tagrule_engine::{Error, FieldError, Record, Validator};

#[derive(Record)]
struct Holder {
    #[tag("each={")]
    items: Vec<String>,
}

#[derive(Record)]
struct Scalar {
    #[tag("each={")]
    value: i32,
}

#[derive(Record)]
struct Typo {
    #[tag("each:{}")]
    names: Vec<String>,
}

#[test]
fn unclosed_braces_fail_at_runtime_regardless_of_type() {
    let validator = Validator::new();
    for err in [
        validator.validate(&Holder { items: vec![] }).unwrap_err(),
        validator.validate(&Scalar { value: 1 }).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            Error::Field {
                source: FieldError::Grammar(_),
                ..
            }
        ));
        assert!(err.to_string().contains(r#"unclosed braces in "each={""#));
    }
}

#[test]
fn unclosed_braces_fail_at_analysis_time() {
    assert_eq!(
        check_annotation("each={", &BTreeSet::new()),
        vec![r#"unclosed braces in "each={""#]
    );
}

#[test]
fn colon_typo_is_soft_at_runtime_and_hard_statically() {
    let input = Typo {
        names: vec![String::new()],
    };
    assert!(Validator::new().validate(&input).is_ok());
    assert_eq!(
        check_annotation("each:{}", &BTreeSet::new()),
        vec![r#"invalid syntax "each:{}" - did you mean "each={}"?"#]
    );
}
