//! Package scans

use std::path::Path;

use tagrule_analyzer::{Analyzer, AnalyzerConfig, AnalyzerError, Report};

use crate::package;

const MODEL: &str = r#"use tagrule_engine::Record;

#[derive(Record)]
pub struct Account {
    #[tag("required,min=2,max=32")]
    pub name: String,
    #[tag("each={min=1,max=23,credential}")]
    pub logins: Vec<String>,
}
"#;

const SETUP: &str = r#"use tagrule_engine::{FieldContext, RuleError, Validator};

pub fn validator() -> Validator {
    let mut validator = Validator::new();
    validator.register("credential", check_credential);
    validator
}

fn check_credential(_: &FieldContext<'_>) -> Result<(), RuleError> {
    Ok(())
}
"#;

fn scan(dir: &Path) -> Report {
    Analyzer::new().analyze(dir).unwrap()
}

fn messages(report: &Report) -> Vec<String> {
    report.diagnostics.iter().map(|d| d.message.clone()).collect()
}

#[test]
fn registrations_in_other_files_are_discovered() {
    let dir = package(&[("src/model.rs", MODEL), ("src/setup.rs", SETUP)]);
    let report = scan(dir.path());
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.custom_validators, vec!["credential"]);
}

#[test]
fn missing_registration_is_reported() {
    let dir = package(&[("src/model.rs", MODEL)]);
    let report = scan(dir.path());
    assert_eq!(messages(&report), vec![r#"unknown validator "credential""#]);
    assert_eq!(report.diagnostics[0].field, "logins");
    assert_eq!(report.diagnostics[0].line, 8);
}

#[test]
fn colon_typo_in_a_nested_module() {
    let dir = package(&[(
        "src/api/forms.rs",
        "pub struct Form {\n    #[tag(\"each:{}\")]\n    pub names: Vec<String>,\n}\n",
    )]);
    let report = scan(dir.path());
    assert_eq!(report.error_count(), 1);
    let diagnostic = &report.diagnostics[0];
    assert!(diagnostic.file.ends_with("src/api/forms.rs"));
    assert_eq!(
        diagnostic.message,
        r#"invalid syntax "each:{}" - did you mean "each={}"?"#
    );
    assert!(
        diagnostic
            .to_string()
            .ends_with(r#":3:9: tag error in field "names": invalid syntax "each:{}" - did you mean "each={}"? (tag: "each:{}")"#)
    );
}

#[test]
fn test_code_is_excluded() {
    let bad = "struct Bad { #[tag(\"nope\")] a: u8 }\n";
    let dir = package(&[
        ("src/lib.rs", "pub fn f() {}\n"),
        ("tests/integration.rs", bad),
        ("benches/speed.rs", bad),
        ("src/model_test.rs", bad),
        ("src/model_tests.rs", bad),
        ("src/tests.rs", bad),
        ("target/debug/build/out.rs", bad),
        (".git/hooks/x.rs", bad),
        ("notes.txt", "not rust"),
    ]);
    let report = scan(dir.path());
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.files_scanned, 1);
}

#[test]
fn registrations_in_test_code_do_not_count() {
    let dir = package(&[
        ("src/model.rs", MODEL),
        ("tests/setup.rs", SETUP),
        (
            "src/lib.rs",
            "#[cfg(test)]\nmod tests {\n    fn f(v: &mut V) { v.register(\"credential\", g); }\n}\n",
        ),
    ]);
    let report = scan(dir.path());
    assert!(report.custom_validators.is_empty());
    assert_eq!(report.error_count(), 1);
}

#[test]
fn every_problem_is_reported() {
    let dir = package(&[(
        "src/lib.rs",
        r#"
        pub struct Everything {
            #[tag("min")]
            a: String,
            #[tag("max=ten")]
            b: String,
            #[tag("required=yes")]
            c: String,
            #[tag("=5,min=1")]
            d: String,
            #[tag("each={min=1")]
            e: Vec<String>,
        }
        "#,
    )]);
    let report = scan(dir.path());
    assert_eq!(
        messages(&report),
        vec![
            "min expects integer parameter, got none".to_string(),
            r#"max expects integer parameter, got "ten""#.to_string(),
            "required validator does not accept parameters".to_string(),
            "empty validator name".to_string(),
            r#"unclosed braces in "each={min=1""#.to_string(),
        ]
    );
}

#[test]
fn custom_register_method_names() {
    let source = r#"
        fn setup(v: &mut V) { v.add_rule("slug", f); }
        struct Post { #[tag("slug")] path: String }
    "#;
    let dir = package(&[("src/lib.rs", source)]);
    assert_eq!(scan(dir.path()).error_count(), 1);

    let config = AnalyzerConfig::default().with_register_methods(["add_rule"]);
    let report = Analyzer::with_config(config).analyze(dir.path()).unwrap();
    assert!(report.is_clean());
}

#[test]
fn syntax_errors_abort_the_scan() {
    let dir = package(&[("src/lib.rs", "pub struct {")]);
    let err = Analyzer::new().analyze(dir.path()).unwrap_err();
    assert!(matches!(err, AnalyzerError::Syntax { .. }));
}

#[test]
fn root_must_be_a_directory() {
    let dir = package(&[("src/lib.rs", "")]);
    let err = Analyzer::new().analyze(dir.path().join("src/lib.rs")).unwrap_err();
    assert!(matches!(err, AnalyzerError::NotADirectory(_)));
}

#[test]
fn report_serializes_to_json() {
    let dir = package(&[("src/model.rs", MODEL)]);
    let report = scan(dir.path());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["files_scanned"], 1);
    assert_eq!(json["diagnostics"][0]["field"], "logins");
    assert_eq!(
        json["diagnostics"][0]["annotation"],
        "each={min=1,max=23,credential}"
    );

    let back: Report = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
