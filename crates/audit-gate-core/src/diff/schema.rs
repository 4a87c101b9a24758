//! Schema definitions for audit diffs.
//!
//! Defines the structures that represent differences between two audits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of difference a diff records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffType {
    Error,
    Score,
    NumericValue,
    DisplayValue,
    ItemCount,
    ItemAddition,
    ItemRemoval,
    ItemDelta,
}

impl DiffType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffType::Error => "error",
            DiffType::Score => "score",
            DiffType::NumericValue => "numericValue",
            DiffType::DisplayValue => "displayValue",
            DiffType::ItemCount => "itemCount",
            DiffType::ItemAddition => "itemAddition",
            DiffType::ItemRemoval => "itemRemoval",
            DiffType::ItemDelta => "itemDelta",
        }
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single semantic difference between a base and a compare audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AuditDiff {
    /// A diff of `attempted_type` could not be computed
    #[serde(rename_all = "camelCase")]
    Error {
        audit_id: String,
        attempted_type: DiffType,
        base_value: Option<f64>,
        compare_value: Option<f64>,
    },

    #[serde(rename_all = "camelCase")]
    Score {
        audit_id: String,
        base_value: Option<f64>,
        compare_value: Option<f64>,
    },

    #[serde(rename_all = "camelCase")]
    NumericValue {
        audit_id: String,
        base_value: f64,
        compare_value: f64,
    },

    #[serde(rename_all = "camelCase")]
    DisplayValue {
        audit_id: String,
        base_value: Option<String>,
        compare_value: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    ItemCount {
        audit_id: String,
        base_value: usize,
        compare_value: usize,
    },

    #[serde(rename_all = "camelCase")]
    ItemAddition {
        audit_id: String,
        compare_item_index: usize,
    },

    #[serde(rename_all = "camelCase")]
    ItemRemoval {
        audit_id: String,
        base_item_index: usize,
    },

    /// A numeric property changed between two matched items
    #[serde(rename_all = "camelCase")]
    ItemDelta {
        audit_id: String,
        base_item_index: usize,
        compare_item_index: usize,
        item_key: String,
        base_value: f64,
        compare_value: f64,
    },
}

/// Direction of a diff from the compare report's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLabel {
    Improvement,
    Regression,
    Neutral,
}

impl AuditDiff {
    pub fn audit_id(&self) -> &str {
        match self {
            AuditDiff::Error { audit_id, .. }
            | AuditDiff::Score { audit_id, .. }
            | AuditDiff::NumericValue { audit_id, .. }
            | AuditDiff::DisplayValue { audit_id, .. }
            | AuditDiff::ItemCount { audit_id, .. }
            | AuditDiff::ItemAddition { audit_id, .. }
            | AuditDiff::ItemRemoval { audit_id, .. }
            | AuditDiff::ItemDelta { audit_id, .. } => audit_id,
        }
    }

    pub fn diff_type(&self) -> DiffType {
        match self {
            AuditDiff::Error { .. } => DiffType::Error,
            AuditDiff::Score { .. } => DiffType::Score,
            AuditDiff::NumericValue { .. } => DiffType::NumericValue,
            AuditDiff::DisplayValue { .. } => DiffType::DisplayValue,
            AuditDiff::ItemCount { .. } => DiffType::ItemCount,
            AuditDiff::ItemAddition { .. } => DiffType::ItemAddition,
            AuditDiff::ItemRemoval { .. } => DiffType::ItemRemoval,
            AuditDiff::ItemDelta { .. } => DiffType::ItemDelta,
        }
    }

    /// Classify the diff; higher scores are better, lower values are better
    pub fn label(&self) -> DiffLabel {
        let lower_is_better = |base: f64, compare: f64| {
            if compare < base {
                DiffLabel::Improvement
            } else if compare > base {
                DiffLabel::Regression
            } else {
                DiffLabel::Neutral
            }
        };

        match self {
            AuditDiff::Score {
                base_value: Some(base),
                compare_value: Some(compare),
                ..
            } => lower_is_better(*compare, *base),
            AuditDiff::NumericValue {
                base_value,
                compare_value,
                ..
            }
            | AuditDiff::ItemDelta {
                base_value,
                compare_value,
                ..
            } => lower_is_better(*base_value, *compare_value),
            AuditDiff::ItemAddition { .. } => DiffLabel::Regression,
            AuditDiff::ItemRemoval { .. } => DiffLabel::Improvement,
            _ => DiffLabel::Neutral,
        }
    }
}

/// Options controlling which numeric changes are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOptions {
    /// Minimum |compare - base| / |base| (as a fraction) for numericValue and
    /// itemDelta diffs; any non-zero change is reported at 0
    #[serde(default)]
    pub percent_absolute_delta_threshold: f64,
}
