use super::*;
use std::io::Write;

#[test]
fn test_severity_names_and_levels() {
    assert_eq!(RuleSeverity::from_name("off"), Some(RuleSeverity::Off));
    assert_eq!(RuleSeverity::from_name(" Warn "), Some(RuleSeverity::Warn));
    assert_eq!(RuleSeverity::from_name("ERROR"), Some(RuleSeverity::Error));
    assert_eq!(RuleSeverity::from_name("fatal"), None);

    assert_eq!(RuleSeverity::from_level(0), Some(RuleSeverity::Off));
    assert_eq!(RuleSeverity::from_level(1), Some(RuleSeverity::Warn));
    assert_eq!(RuleSeverity::from_level(2), Some(RuleSeverity::Error));
    assert_eq!(RuleSeverity::from_level(3), None);
}

#[test]
fn test_severity_categories() {
    assert_eq!(RuleSeverity::Off.category(), None);
    assert_eq!(
        RuleSeverity::Warn.category(),
        Some(DiagnosticCategory::Warning)
    );
    assert_eq!(
        RuleSeverity::Error.category(),
        Some(DiagnosticCategory::Error)
    );
    assert!(!RuleSeverity::Off.is_enabled());
    assert!(RuleSeverity::Warn.is_enabled());
}

#[test]
fn test_parses_every_severity_form() {
    let config = LintConfig::from_json_str(
        r#"{
            "rules": {
                "a": "error",
                "b": 1,
                "c": ["warn", { "ignored": true }],
                "d": [0],
                "e": "off"
            }
        }"#,
    )
    .unwrap();

    assert_eq!(config.severity("a"), RuleSeverity::Error);
    assert_eq!(config.severity("b"), RuleSeverity::Warn);
    assert_eq!(config.severity("c"), RuleSeverity::Warn);
    assert_eq!(config.severity("d"), RuleSeverity::Off);
    assert_eq!(config.severity("e"), RuleSeverity::Off);
    assert_eq!(config.severity("unlisted"), RuleSeverity::Off);
    // declaration order is kept
    let names: Vec<&str> = config.rules.keys().map(String::as_str).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_missing_rules_table_is_empty() {
    let config = LintConfig::from_json_str("{}").unwrap();
    assert!(config.rules.is_empty());
}

#[test]
fn test_rejects_invalid_severities() {
    assert!(LintConfig::from_json_str(r#"{ "rules": { "a": "fatal" } }"#).is_err());
    assert!(LintConfig::from_json_str(r#"{ "rules": { "a": 3 } }"#).is_err());
    assert!(LintConfig::from_json_str(r#"{ "rules": { "a": [] } }"#).is_err());
    assert!(LintConfig::from_json_str(r#"{ "rules": { "a": true } }"#).is_err());
}

#[test]
fn test_parse_errors_carry_context() {
    let err = LintConfig::from_json_str("{ not json").unwrap_err();
    assert_eq!(err.to_string(), "failed to parse lint config JSON");
}

#[test]
fn test_recommended_enables_both_rules() {
    let config = LintConfig::recommended();
    assert_eq!(config.severity("no-set-spread"), RuleSeverity::Error);
    assert_eq!(config.severity("no-for-of-set"), RuleSeverity::Error);
}

#[test]
fn test_serializes_severities_as_names() {
    let config = LintConfig::default()
        .with_rule("no-set-spread", RuleSeverity::Warn)
        .with_rule("no-for-of-set", RuleSeverity::Off);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(
        json,
        r#"{"rules":{"no-set-spread":"warn","no-for-of-set":"off"}}"#
    );
    assert_eq!(LintConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "rules": {{ "no-for-of-set": "warn" }} }}"#).unwrap();

    let config = LintConfig::from_file(file.path()).unwrap();
    assert_eq!(config.severity("no-for-of-set"), RuleSeverity::Warn);
}

#[test]
fn test_missing_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = LintConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to read lint config: "));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "rules": { "no-set-spread": "loud" } }"#).unwrap();

    let err = LintConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse lint config: "));
    assert!(format!("{err:#}").contains("failed to parse lint config JSON"));
}
