//! Expansion of budget-shaped audits into per-resource results.
//!
//! Budget audits report one row per resource type (or timing metric) with
//! the amount by which it exceeds its budget. Each exceeded row becomes its
//! own `maxNumericValue` result.

use serde_json::Value;

use super::config::AssertionLevel;
use super::results::{AssertionName, AssertionResult, Operator};
use crate::report::{AuditRecord, DetailItem};
use crate::utils::config::{PERFORMANCE_BUDGET_AUDIT_ID, TIMING_BUDGET_AUDIT_ID};

/// Shape of an audit's detail items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsShape {
    /// Rows keyed by resource type with size/count over budget
    ResourceBudget,
    /// Rows keyed by timing metric with a measurement over budget
    TimingBudget,
    Generic,
}

/// Classify detail items by the fields they carry
///
/// Only budget audits report `sizeOverBudget`/`countOverBudget` or
/// `overBudget`, so a table is budget-shaped when at least one row carries
/// them. Tables with every row within budget classify as `Generic`; see
/// [`budget_shape`].
pub fn classify_details(items: &[DetailItem]) -> DetailsShape {
    if items.is_empty() {
        return DetailsShape::Generic;
    }

    let all_have = |field: &str| items.iter().all(|item| item.contains_key(field));
    let any_has = |fields: &[&str]| {
        items
            .iter()
            .any(|item| fields.iter().any(|f| item.contains_key(*f)))
    };

    if all_have("resourceType") && any_has(&["sizeOverBudget", "countOverBudget"]) {
        DetailsShape::ResourceBudget
    } else if all_have("metric") && all_have("measurement") && any_has(&["overBudget"]) {
        DetailsShape::TimingBudget
    } else {
        DetailsShape::Generic
    }
}

/// Shape of an audit across its runs
///
/// Any run with over-budget rows decides the shape. Otherwise the budget
/// audits themselves stay budget-shaped so that a run within budget yields
/// no results instead of being checked like a scored audit.
pub fn budget_shape<'a>(
    audit_id: &str,
    records: impl IntoIterator<Item = &'a AuditRecord>,
) -> DetailsShape {
    let from_items = records
        .into_iter()
        .filter_map(AuditRecord::items)
        .map(classify_details)
        .find(|shape| *shape != DetailsShape::Generic);

    match (from_items, audit_id) {
        (Some(shape), _) => shape,
        (None, PERFORMANCE_BUDGET_AUDIT_ID) => DetailsShape::ResourceBudget,
        (None, TIMING_BUDGET_AUDIT_ID) => DetailsShape::TimingBudget,
        (None, _) => DetailsShape::Generic,
    }
}

/// Expand budget rows that exceed their budget into failing results
///
/// Identical rows from repeated runs are reported once.
pub fn expand_budget_audit<'a>(
    audit_id: &str,
    url: &str,
    level: AssertionLevel,
    shape: DetailsShape,
    records: impl IntoIterator<Item = &'a AuditRecord>,
) -> Vec<AssertionResult> {
    let mut results: Vec<AssertionResult> = Vec::new();

    for item in records.into_iter().filter_map(AuditRecord::items).flatten() {
        for (property, actual, over) in over_budget_rows(shape, item) {
            let result = AssertionResult {
                audit_id: audit_id.to_string(),
                url: url.to_string(),
                name: AssertionName::MaxNumericValue,
                operator: Operator::AtMost,
                expected: actual - over,
                actual,
                values: vec![actual],
                level,
                audit_property: Some(property),
                passed: false,
            };

            let duplicate = results.iter().any(|existing| {
                existing.audit_property == result.audit_property
                    && existing.expected == result.expected
                    && existing.actual == result.actual
            });
            if !duplicate {
                results.push(result);
            }
        }
    }

    results
}

/// (auditProperty, actual, overBudget) for each exceeded budget in a row
fn over_budget_rows(shape: DetailsShape, item: &DetailItem) -> Vec<(String, f64, f64)> {
    let mut rows = Vec::new();

    match shape {
        DetailsShape::ResourceBudget => {
            let Some(resource_type) = item.get("resourceType").and_then(Value::as_str) else {
                return rows;
            };

            if let Some(over) = positive(item, "sizeOverBudget") {
                if let Some(size) = number(item, "size").or_else(|| number(item, "transferSize")) {
                    rows.push((format!("{}.size", resource_type), size, over));
                }
            }
            if let Some(over) = positive(item, "countOverBudget") {
                if let Some(count) = number(item, "requestCount") {
                    rows.push((format!("{}.count", resource_type), count, over));
                }
            }
        }
        DetailsShape::TimingBudget => {
            let metric = item.get("metric").and_then(Value::as_str);
            let measurement = number(item, "measurement");
            if let (Some(metric), Some(measurement), Some(over)) =
                (metric, measurement, positive(item, "overBudget"))
            {
                rows.push((metric.to_string(), measurement, over));
            }
        }
        DetailsShape::Generic => {}
    }

    rows
}

fn number(item: &DetailItem, field: &str) -> Option<f64> {
    item.get(field).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn positive(item: &DetailItem, field: &str) -> Option<f64> {
    number(item, field).filter(|v| *v > 0.0)
}
