//! Integration tests for derived records and input handling

use std::collections::HashMap;

use tagrule_engine::{AsValue, Error, Kind, Record, Validator, Value};

#[derive(Record)]
struct User {
    #[tag("min=2,max=4")]
    name: String,
    nickname: String,
}

#[derive(Record)]
struct Pair(#[tag("required")] String, #[tag("max=10")] u32);

#[derive(Record)]
struct Wrapper<T> {
    #[tag("required")]
    inner: T,
}

#[derive(Record)]
struct Keyword {
    #[tag("min=1")]
    r#type: String,
}

#[derive(Record)]
struct Mixed {
    #[tag("max=2")]
    map: HashMap<String, u8>,
    #[tag("min=1")]
    maybe: Option<String>,
    #[tag("required")]
    boxed: Box<u8>,
}

fn user(name: &str) -> User {
    User {
        name: name.to_string(),
        nickname: String::new(),
    }
}

// =============================================================================
// Derived views
// =============================================================================

#[test]
fn derive_exposes_fields_in_order() {
    let input = user("john");
    let value = input.as_value();
    let record = value.as_record().unwrap();
    assert_eq!(record.name, "User");
    let names: Vec<_> = record.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "nickname"]);
    assert_eq!(record.fields[0].annotation, Some("min=2,max=4"));
    assert_eq!(record.fields[1].annotation, None);
    assert_eq!(record.fields[0].value, Value::Text("john"));
}

#[test]
fn tuple_and_raw_identifier_fields() {
    let pair = Pair("x".to_string(), 3);
    let value = pair.as_value();
    let names: Vec<_> = value.as_record().unwrap().fields.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["0", "1"]);

    let keyword = Keyword {
        r#type: String::new(),
    };
    let err = Validator::new().validate(&keyword).unwrap_err();
    assert_eq!(err.path(), Some("type"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn min_max_on_names() {
    let validator = Validator::new();
    assert!(validator.validate(&user("john")).is_ok());

    let err = validator.validate(&user("J")).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"field "name" validation error: should have length at least 2 (received: 'J')"#
    );

    let err = validator.validate(&user("johnny")).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"field "name" validation error: should have length at most 4 (received: 'johnny')"#
    );
}

#[test]
fn pointer_and_optional_inputs() {
    let validator = Validator::new();
    let boxed = Box::new(user("J"));
    assert!(validator.validate(&boxed).is_err());
    assert!(validator.validate(&Some(user("john"))).is_ok());
    assert!(validator.validate(&&user("john")).is_ok());
}

#[test]
fn unsupported_inputs() {
    let validator = Validator::new();
    let none: Option<User> = None;
    for (err, kind) in [
        (validator.validate(&none).unwrap_err(), Kind::Nil),
        (validator.validate(&5u8).unwrap_err(), Kind::Uint),
        (validator.validate("text").unwrap_err(), Kind::Text),
        (validator.validate(&vec![user("john")]).unwrap_err(), Kind::List),
        (validator.validate(&Some(Some(user("john")))).unwrap_err(), Kind::Optional),
    ] {
        assert!(matches!(err, Error::UnsupportedInput { kind: k } if k == kind));
    }
}

#[test]
fn generic_records() {
    let validator = Validator::new();
    assert!(validator.validate(&Wrapper { inner: 0u8 }).is_err());
    assert!(validator.validate(&Wrapper { inner: vec![1] }).is_ok());
    assert!(validator.validate(&Wrapper { inner: user("") }).is_err());
}

#[test]
fn maps_optionals_and_boxes() {
    let validator = Validator::new();
    let ok = Mixed {
        map: HashMap::from([("a".to_string(), 1)]),
        maybe: Some("x".to_string()),
        boxed: Box::new(1),
    };
    assert!(validator.validate(&ok).is_ok());

    let empty_optional = Mixed {
        maybe: None,
        ..ok
    };
    let err = validator.validate(&empty_optional).unwrap_err();
    assert_eq!(err.path(), Some("maybe"));
}

#[test]
fn record_is_not_mutated() {
    let validator = Validator::new();
    let input = user("johnny");
    let _ = validator.validate(&input);
    assert_eq!(input.name, "johnny");
}
