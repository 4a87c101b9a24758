//! Scenario tests for the diff module.
//!
//! Exercises audit-level and report-level comparisons end to end.

use super::*;
use crate::report::{AuditRecord, ReportDocument};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Helper function to build an audit record from JSON
fn audit(value: Value) -> AuditRecord {
    serde_json::from_value(value).unwrap()
}

fn report(url: &str, audits: Value) -> ReportDocument {
    serde_json::from_value(json!({ "finalUrl": url, "audits": audits })).unwrap()
}

fn diff(base: Value, compare: Value) -> Vec<AuditDiff> {
    let audit_id = base["id"].as_str().unwrap_or_default().to_string();
    find_audit_diffs(&audit_id, &audit(base), &audit(compare), &DiffOptions::default()).unwrap()
}

#[test]
fn test_score_change_yields_single_diff() {
    let diffs = diff(
        json!({ "id": "first-contentful-paint", "score": 0.8 }),
        json!({ "id": "first-contentful-paint", "score": 0.4 }),
    );

    assert_eq!(
        diffs,
        vec![AuditDiff::Score {
            audit_id: "first-contentful-paint".to_string(),
            base_value: Some(0.8),
            compare_value: Some(0.4),
        }]
    );
    assert_eq!(diffs[0].label(), DiffLabel::Regression);
}

#[test]
fn test_identical_audits_have_no_diffs() {
    let record = json!({
        "id": "bootup-time",
        "score": 0.5,
        "numericValue": 1200,
        "displayValue": "1.2 s",
        "details": { "type": "table", "items": [{ "url": "a.js", "total": 5 }] }
    });

    assert!(diff(record.clone(), record).is_empty());
}

#[test]
fn test_null_score_is_its_own_value() {
    let diffs = diff(
        json!({ "id": "a", "score": null }),
        json!({ "id": "a", "score": 1 }),
    );

    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].diff_type(), DiffType::Score);
    assert_eq!(diffs[0].label(), DiffLabel::Neutral);
}

#[test]
fn test_score_diff_ignores_threshold() {
    let options = DiffOptions {
        percent_absolute_delta_threshold: 10.0,
    };
    let diffs = find_audit_diffs(
        "a",
        &audit(json!({ "id": "a", "score": 0.9, "numericValue": 100 })),
        &audit(json!({ "id": "a", "score": 0.91, "numericValue": 101 })),
        &options,
    )
    .unwrap();

    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].diff_type(), DiffType::Score);
}

#[test]
fn test_numeric_value_threshold() {
    let base = audit(json!({ "id": "interactive", "numericValue": 1000 }));
    let compare = audit(json!({ "id": "interactive", "numericValue": 1040 }));

    let noisy = find_audit_diffs("interactive", &base, &compare, &DiffOptions::default()).unwrap();
    assert_eq!(
        noisy,
        vec![AuditDiff::NumericValue {
            audit_id: "interactive".to_string(),
            base_value: 1000.0,
            compare_value: 1040.0,
        }]
    );

    let options = DiffOptions {
        percent_absolute_delta_threshold: 0.05,
    };
    assert!(find_audit_diffs("interactive", &base, &compare, &options).unwrap().is_empty());
}

#[test]
fn test_numeric_value_on_one_side_is_error() {
    let diffs = diff(
        json!({ "id": "interactive", "numericValue": 1000 }),
        json!({ "id": "interactive" }),
    );

    assert_eq!(
        diffs,
        vec![AuditDiff::Error {
            audit_id: "interactive".to_string(),
            attempted_type: DiffType::NumericValue,
            base_value: Some(1000.0),
            compare_value: None,
        }]
    );
}

#[test]
fn test_display_value_change() {
    let diffs = diff(
        json!({ "id": "a", "displayValue": "2 resources" }),
        json!({ "id": "a", "displayValue": "3 resources" }),
    );

    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].diff_type(), DiffType::DisplayValue);
}

#[test]
fn test_item_reconciliation() {
    let diffs = diff(
        json!({
            "id": "network-requests",
            "details": { "type": "table", "items": [
                { "url": "https://x.example/a.js", "transferSize": 1000 },
                { "url": "https://x.example/b.js", "transferSize": 500 },
                { "url": "https://x.example/c.js", "transferSize": 200 }
            ]}
        }),
        json!({
            "id": "network-requests",
            "details": { "type": "table", "items": [
                { "url": "https://x.example/c.js", "transferSize": 200 },
                { "url": "https://x.example/a.js", "transferSize": 1500 },
                { "url": "https://x.example/d.js", "transferSize": 50 },
                { "url": "https://x.example/e.js", "transferSize": 60 }
            ]}
        }),
    );

    let expected = vec![
        AuditDiff::ItemCount {
            audit_id: "network-requests".to_string(),
            base_value: 3,
            compare_value: 4,
        },
        AuditDiff::ItemDelta {
            audit_id: "network-requests".to_string(),
            base_item_index: 0,
            compare_item_index: 1,
            item_key: "transferSize".to_string(),
            base_value: 1000.0,
            compare_value: 1500.0,
        },
        AuditDiff::ItemRemoval {
            audit_id: "network-requests".to_string(),
            base_item_index: 1,
        },
        AuditDiff::ItemAddition {
            audit_id: "network-requests".to_string(),
            compare_item_index: 2,
        },
        AuditDiff::ItemAddition {
            audit_id: "network-requests".to_string(),
            compare_item_index: 3,
        },
    ];

    assert_eq!(diffs, expected);
}

#[test]
fn test_items_on_one_side_degrade_to_removals() {
    let diffs = diff(
        json!({
            "id": "a",
            "details": { "type": "table", "items": [{ "url": "x" }, { "url": "y" }] }
        }),
        json!({ "id": "a" }),
    );

    let types: Vec<DiffType> = diffs.iter().map(AuditDiff::diff_type).collect();
    assert_eq!(
        types,
        vec![DiffType::ItemCount, DiffType::ItemRemoval, DiffType::ItemRemoval]
    );
}

#[test]
fn test_item_delta_ignores_non_numeric_fields() {
    let diffs = diff(
        json!({
            "id": "dom-size",
            "details": { "type": "table", "items": [
                { "label": "depth", "node": { "snippet": "<div>" }, "value": 10 }
            ]}
        }),
        json!({
            "id": "dom-size",
            "details": { "type": "table", "items": [
                { "label": "depth", "node": { "snippet": "<span>" }, "value": 10 }
            ]}
        }),
    );

    assert!(diffs.is_empty());
}

#[test]
fn test_mismatched_audits_are_rejected() {
    let result = find_audit_diffs(
        "a",
        &audit(json!({ "id": "a" })),
        &audit(json!({ "id": "b" })),
        &DiffOptions::default(),
    );

    assert!(matches!(result, Err(DiffError::MismatchedAudits { .. })));
}

#[test]
fn test_record_id_must_match_requested_audit() {
    let result = find_audit_diffs(
        "a",
        &audit(json!({ "score": 0.5 })),
        &audit(json!({ "id": "b", "score": 0.7 })),
        &DiffOptions::default(),
    );

    assert_eq!(
        result,
        Err(DiffError::MismatchedAudits {
            base: "a".to_string(),
            compare: "b".to_string(),
        })
    );
}

#[test]
fn test_records_without_ids_use_requested_audit_id() {
    let diffs = find_audit_diffs(
        "first-contentful-paint",
        &audit(json!({ "score": 0.8 })),
        &audit(json!({ "score": 0.4 })),
        &DiffOptions::default(),
    )
    .unwrap();

    assert_eq!(
        diffs,
        vec![AuditDiff::Score {
            audit_id: "first-contentful-paint".to_string(),
            base_value: Some(0.8),
            compare_value: Some(0.4),
        }]
    );
}

#[test]
fn test_report_diffs_cover_both_sides() {
    let base = report(
        "https://a.example/",
        json!({
            "first-contentful-paint": { "score": 0.9 },
            "legacy-audit": { "score": 1 }
        }),
    );
    let compare = report(
        "https://a.example/",
        json!({
            "first-contentful-paint": { "score": 0.7 },
            "new-audit": { "score": 0 }
        }),
    );

    let diffs = find_report_diffs(&base, &compare, &DiffOptions::default());

    assert_eq!(
        diffs,
        vec![
            AuditDiff::Score {
                audit_id: "first-contentful-paint".to_string(),
                base_value: Some(0.9),
                compare_value: Some(0.7),
            },
            AuditDiff::Error {
                audit_id: "legacy-audit".to_string(),
                attempted_type: DiffType::Score,
                base_value: Some(1.0),
                compare_value: None,
            },
            AuditDiff::Error {
                audit_id: "new-audit".to_string(),
                attempted_type: DiffType::Score,
                base_value: None,
                compare_value: Some(0.0),
            },
        ]
    );
}

#[test]
fn test_empty_base_table_yields_count_then_addition() {
    let diffs = diff(
        json!({ "id": "a", "details": { "type": "table", "items": [] } }),
        json!({ "id": "a", "details": { "type": "table", "items": [{ "url": "a.js" }] } }),
    );

    assert_eq!(
        diffs,
        vec![
            AuditDiff::ItemCount {
                audit_id: "a".to_string(),
                base_value: 0,
                compare_value: 1,
            },
            AuditDiff::ItemAddition {
                audit_id: "a".to_string(),
                compare_item_index: 0,
            },
        ]
    );
}
