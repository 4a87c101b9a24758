//! Core diff engine implementation.
//! Compares two audits, or every audit of two reports, into a flat list of diffs.

use crate::report::{AuditRecord, DetailItem, ReportDocument};
use crate::utils::error::DiffError;
use std::collections::BTreeSet;

use super::normalizer::{exceeds_threshold, match_items, numeric_changes};
use super::schema::{AuditDiff, DiffOptions, DiffType};

/// Compute the differences between two results of the same audit
///
/// Diffs are emitted in a fixed order: score, numericValue, displayValue,
/// itemCount, then per-item deltas, removals and additions. Every diff
/// carries `audit_id`; records without an `id` of their own are accepted.
///
/// # Errors
/// * `DiffError::MismatchedAudits` - If a record carries an id other than `audit_id`
///
/// # Example
/// ```ignore
/// use audit_gate_core::diff::{find_audit_diffs, DiffOptions};
///
/// let diffs = find_audit_diffs("unused-javascript", &base_audit, &compare_audit, &DiffOptions::default())?;
/// ```
pub fn find_audit_diffs(
    audit_id: &str,
    base: &AuditRecord,
    compare: &AuditRecord,
    options: &DiffOptions,
) -> Result<Vec<AuditDiff>, DiffError> {
    let base_id = base.id.as_deref().unwrap_or(audit_id);
    let compare_id = compare.id.as_deref().unwrap_or(audit_id);
    if base_id != audit_id || compare_id != audit_id {
        return Err(DiffError::MismatchedAudits {
            base: base_id.to_string(),
            compare: compare_id.to_string(),
        });
    }

    Ok(diff_records(audit_id, base, compare, options))
}

/// Compute the differences between every audit of two reports
///
/// Audits are visited in id order. An audit present on only one side
/// yields a single error diff for the score.
pub fn find_report_diffs(
    base: &ReportDocument,
    compare: &ReportDocument,
    options: &DiffOptions,
) -> Vec<AuditDiff> {
    let audit_ids: BTreeSet<&String> = base.audits.keys().chain(compare.audits.keys()).collect();

    let mut diffs = Vec::new();
    for audit_id in audit_ids {
        match (base.audit(audit_id), compare.audit(audit_id)) {
            (Some(base_audit), Some(compare_audit)) => {
                diffs.extend(diff_records(audit_id, base_audit, compare_audit, options));
            }
            (base_audit, compare_audit) => {
                log::debug!("Audit {} present in only one report", audit_id);
                diffs.push(AuditDiff::Error {
                    audit_id: audit_id.clone(),
                    attempted_type: DiffType::Score,
                    base_value: base_audit.and_then(|audit| audit.score),
                    compare_value: compare_audit.and_then(|audit| audit.score),
                });
            }
        }
    }

    diffs
}

fn diff_records(
    audit_id: &str,
    base: &AuditRecord,
    compare: &AuditRecord,
    options: &DiffOptions,
) -> Vec<AuditDiff> {
    let mut diffs = Vec::new();
    let threshold = options.percent_absolute_delta_threshold;

    if let Some(diff) = score_diff(audit_id, base.score, compare.score) {
        diffs.push(diff);
    }

    if let Some(diff) = numeric_value_diff(audit_id, base.numeric_value, compare.numeric_value, threshold) {
        diffs.push(diff);
    }

    if base.display_value != compare.display_value {
        diffs.push(AuditDiff::DisplayValue {
            audit_id: audit_id.to_string(),
            base_value: base.display_value.clone(),
            compare_value: compare.display_value.clone(),
        });
    }

    // A table on one side only is compared against an empty table
    if base.items().is_some() || compare.items().is_some() {
        let base_items = base.items().unwrap_or(&[]);
        let compare_items = compare.items().unwrap_or(&[]);
        diffs.extend(item_diffs(audit_id, base_items, compare_items, threshold));
    }

    diffs
}

fn score_diff(audit_id: &str, base: Option<f64>, compare: Option<f64>) -> Option<AuditDiff> {
    if base == compare {
        return None;
    }

    let finite = |value: Option<f64>| value.map_or(true, f64::is_finite);
    if !finite(base) || !finite(compare) {
        return Some(AuditDiff::Error {
            audit_id: audit_id.to_string(),
            attempted_type: DiffType::Score,
            base_value: base,
            compare_value: compare,
        });
    }

    Some(AuditDiff::Score {
        audit_id: audit_id.to_string(),
        base_value: base,
        compare_value: compare,
    })
}

fn numeric_value_diff(
    audit_id: &str,
    base: Option<f64>,
    compare: Option<f64>,
    threshold: f64,
) -> Option<AuditDiff> {
    match (base, compare) {
        (None, None) => None,
        (Some(base_value), Some(compare_value)) if base_value.is_finite() && compare_value.is_finite() => {
            exceeds_threshold(base_value, compare_value, threshold).then(|| AuditDiff::NumericValue {
                audit_id: audit_id.to_string(),
                base_value,
                compare_value,
            })
        }
        _ => Some(AuditDiff::Error {
            audit_id: audit_id.to_string(),
            attempted_type: DiffType::NumericValue,
            base_value: base,
            compare_value: compare,
        }),
    }
}

fn item_diffs(
    audit_id: &str,
    base: &[DetailItem],
    compare: &[DetailItem],
    threshold: f64,
) -> Vec<AuditDiff> {
    let mut diffs = Vec::new();

    if base.len() != compare.len() {
        diffs.push(AuditDiff::ItemCount {
            audit_id: audit_id.to_string(),
            base_value: base.len(),
            compare_value: compare.len(),
        });
    }

    let matched = match_items(base, compare);

    for &(base_index, compare_index) in &matched.pairs {
        for (item_key, base_value, compare_value) in numeric_changes(&base[base_index], &compare[compare_index]) {
            if exceeds_threshold(base_value, compare_value, threshold) {
                diffs.push(AuditDiff::ItemDelta {
                    audit_id: audit_id.to_string(),
                    base_item_index: base_index,
                    compare_item_index: compare_index,
                    item_key: item_key.to_string(),
                    base_value,
                    compare_value,
                });
            }
        }
    }

    diffs.extend(matched.removed.iter().map(|&base_item_index| AuditDiff::ItemRemoval {
        audit_id: audit_id.to_string(),
        base_item_index,
    }));

    diffs.extend(matched.added.iter().map(|&compare_item_index| AuditDiff::ItemAddition {
        audit_id: audit_id.to_string(),
        compare_item_index,
    }));

    diffs
}
