use audit_gate_core::commands::{
    execute_assert, execute_diff, load_config, validate_budgets_file, AssertArgs, DiffArgs,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const REPORT: &str = r#"{
    "finalUrl": "https://example.com/",
    "audits": {
        "interactive": { "score": 0.9, "numericValue": 4200 },
        "resource-summary": {
            "score": null,
            "scoreDisplayMode": "informative",
            "details": { "type": "table", "items": [
                { "resourceType": "script", "requestCount": 8, "transferSize": 204800 }
            ]}
        }
    }
}"#;

#[test]
fn test_config_and_budgets_are_ambiguous() {
    let dir = TempDir::new().unwrap();
    let args = AssertArgs {
        config: Some(write(&dir, "rc.json", "{}")),
        budgets: Some(write(&dir, "budget.json", "[]")),
        ..Default::default()
    };

    assert!(load_config(&args).is_err());
}

#[test]
fn test_missing_configuration_is_an_error() {
    assert!(load_config(&AssertArgs::default()).is_err());
}

#[test]
fn test_assert_passes_and_writes_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.json");
    let args = AssertArgs {
        reports: vec![write(&dir, "run-1.json", REPORT)],
        config: Some(write(
            &dir,
            "rc.json",
            r#"{ "assertions": { "interactive": ["error", { "maxNumericValue": 5000 }] } }"#,
        )),
        output: Some(output.clone()),
        ..Default::default()
    };

    let report = execute_assert(args).unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.summary.status, "PASSED");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(written["version"], "1.0.0");
    assert!(written["generatedAt"].is_string());
}

#[test]
fn test_assert_fails_on_budget_violation() {
    let dir = TempDir::new().unwrap();
    let args = AssertArgs {
        reports: vec![write(&dir, "run-1.json", REPORT)],
        budgets: Some(write(
            &dir,
            "budget.json",
            r#"[{ "resourceSizes": [{ "resourceType": "script", "budget": 100 }] }]"#,
        )),
        ..Default::default()
    };

    assert!(execute_assert(args).is_err());
}

#[test]
fn test_diff_command() {
    let dir = TempDir::new().unwrap();
    let compare = REPORT.replace("4200", "4800");
    let args = DiffArgs {
        base: write(&dir, "base.json", REPORT),
        compare: write(&dir, "compare.json", &compare),
        audit: Some("interactive".to_string()),
        threshold_percent: Some(5.0),
        summary: false,
        output: None,
    };

    let report = execute_diff(args).unwrap();
    assert_eq!(report.diffs.len(), 1);
    assert_eq!(report.base_url, "https://example.com/");
}

#[test]
fn test_diff_command_unknown_audit() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        base: write(&dir, "base.json", REPORT),
        compare: write(&dir, "compare.json", REPORT),
        audit: Some("speed-index".to_string()),
        ..Default::default()
    };

    assert!(execute_diff(args).is_err());
}

#[test]
fn test_validate_budgets_file() {
    let dir = TempDir::new().unwrap();
    let valid = write(
        &dir,
        "budget.json",
        r#"[{ "path": "/blog", "timings": [{ "metric": "interactive", "budget": 3000 }] }]"#,
    );
    let invalid = write(&dir, "bad.json", r#"[{ "path": "blog" }]"#);

    assert!(validate_budgets_file(&valid).is_ok());
    assert!(validate_budgets_file(&invalid).is_err());
}
