//! Integration tests for the built-in validators

use proptest::prelude::*;
use tagrule_engine::builtins::{maximum, minimum};
use tagrule_engine::{Error, FieldContext, FieldError, FieldMeta, Record, RuleError, Validator, Value};

#[derive(Record)]
struct Profile {
    #[tag("required")]
    email: String,
    #[tag("required")]
    nickname: Option<String>,
    #[tag("minimum=18,maximum=130")]
    age: i32,
    #[tag("max=3")]
    tags: Vec<String>,
}

fn profile() -> Profile {
    Profile {
        email: "a@b.c".to_string(),
        nickname: Some("jo".to_string()),
        age: 30,
        tags: vec![],
    }
}

#[test]
fn valid_profile() {
    assert!(Validator::new().validate(&profile()).is_ok());
}

#[test]
fn required_rejects_zero_values() {
    let validator = Validator::new();

    let input = Profile {
        email: String::new(),
        ..profile()
    };
    let err = validator.validate(&input).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"field "email" validation error: is required (received: '')"#
    );

    let input = Profile {
        nickname: None,
        ..profile()
    };
    let err = validator.validate(&input).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"field "nickname" validation error: is required (received: '<nil>')"#
    );

    let input = Profile {
        nickname: Some(String::new()),
        ..profile()
    };
    assert_eq!(validator.validate(&input).unwrap_err().path(), Some("nickname"));
}

#[test]
fn long_form_bounds() {
    let validator = Validator::new();
    let input = Profile {
        age: 17,
        ..profile()
    };
    let err = validator.validate(&input).unwrap_err();
    assert!(err.to_string().contains("should be >= 18"));

    let input = Profile {
        tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        ..profile()
    };
    let err = validator.validate(&input).unwrap_err();
    assert!(err.to_string().contains("should have length at most 3"));
}

#[derive(Record)]
struct BadParam {
    #[tag("min=two")]
    name: String,
}

#[derive(Record)]
struct NotApplicable {
    #[tag("max=1")]
    flag: bool,
}

#[test]
fn parameter_and_type_errors() {
    let validator = Validator::new();
    let err = validator
        .validate(&BadParam {
            name: "x".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Field {
            source: FieldError::Rule(RuleError::BadParameter { .. }),
            ..
        }
    ));

    let err = validator.validate(&NotApplicable { flag: true }).unwrap_err();
    assert!(err.to_string().contains("max is not applicable to type bool"));
}

#[derive(Record)]
struct Missing {
    #[tag("min")]
    name: String,
}

#[test]
#[should_panic(expected = "missing parameter")]
fn bound_without_parameter_panics() {
    let _ = Validator::new().validate(&Missing {
        name: "x".to_string(),
    });
}

// =============================================================================
// Properties
// =============================================================================

fn bound(
    rule: fn(&FieldContext<'_>) -> Result<(), RuleError>,
    limit: i64,
    value: &Value<'_>,
) -> bool {
    let param = limit.to_string();
    let meta = FieldMeta::new("Text", "value", "");
    rule(&FieldContext::new(value, Some(&param), "min", &meta)).is_ok()
}

proptest! {
    #[test]
    fn bounds_agree_with_byte_length(text in "\\PC{0,12}", limit in -2i64..14) {
        let len = i64::try_from(text.len()).unwrap();
        let value = Value::Text(&text);
        prop_assert_eq!(bound(minimum, limit, &value), len >= limit);
        prop_assert_eq!(bound(maximum, limit, &value), len <= limit);
    }

    #[test]
    fn numeric_bounds_agree_with_value(n in any::<i32>(), limit in any::<i32>()) {
        let value = Value::Int(i64::from(n));
        prop_assert_eq!(bound(minimum, i64::from(limit), &value), n >= limit);
        prop_assert_eq!(bound(maximum, i64::from(limit), &value), n <= limit);
    }
}

// =============================================================================
// Edge values
// =============================================================================

#[derive(Record)]
struct Accented {
    #[tag("min=2,max=3")]
    name: String,
}

#[derive(Record)]
struct Signed {
    #[tag("required")]
    value: f64,
}

#[derive(Record)]
struct Lookup {
    #[tag("required")]
    entries: std::collections::BTreeMap<String, u8>,
    #[tag("required")]
    maybe: Option<std::collections::BTreeMap<String, u8>>,
}

#[test]
fn text_bounds_use_byte_length() {
    let validator = Validator::new();
    assert!(validator.validate(&Accented { name: "é".to_string() }).is_ok());
    let err = validator
        .validate(&Accented { name: "éé".to_string() })
        .unwrap_err();
    assert!(err.to_string().contains("should have length at most 3"));
}

#[test]
fn negative_zero_is_present() {
    let validator = Validator::new();
    assert!(validator.validate(&Signed { value: -0.0 }).is_ok());
    let err = validator.validate(&Signed { value: 0.0 }).unwrap_err();
    assert_eq!(err.path(), Some("value"));
}

#[test]
fn empty_map_is_zero() {
    let validator = Validator::new();
    let filled = || std::collections::BTreeMap::from([("a".to_string(), 1)]);

    let err = validator
        .validate(&Lookup {
            entries: std::collections::BTreeMap::new(),
            maybe: Some(filled()),
        })
        .unwrap_err();
    assert_eq!(err.path(), Some("entries"));

    let err = validator
        .validate(&Lookup {
            entries: filled(),
            maybe: Some(std::collections::BTreeMap::new()),
        })
        .unwrap_err();
    assert_eq!(err.path(), Some("maybe"));

    assert!(
        validator
            .validate(&Lookup {
                entries: filled(),
                maybe: Some(filled()),
            })
            .is_ok()
    );
}
