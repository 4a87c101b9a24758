//! Schema definitions for report documents.
//!
//! Only the fields the assertion engine and diff finder read are modelled;
//! everything else in a report is ignored on load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One row of an audit's details table
pub type DetailItem = Map<String, Value>;

/// One completed analysis of one URL at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// URL the analyzer ended up on after redirects
    pub final_url: String,

    /// URL originally requested, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_url: Option<String>,

    /// When the analysis ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<String>,

    /// Audit results keyed by audit id
    #[serde(default)]
    pub audits: BTreeMap<String, AuditRecord>,

    /// Category scores keyed by category id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, CategoryResult>>,
}

impl ReportDocument {
    /// Look up an audit by id
    pub fn audit(&self, audit_id: &str) -> Option<&AuditRecord> {
        self.audits.get(audit_id)
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> Option<&CategoryResult> {
        self.categories.as_ref()?.get(category_id)
    }
}

/// Result of a single audit within a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    /// Audit id, mirrored from the key in `ReportDocument::audits`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Score in [0, 1], or None when not applicable or informative
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub score_display_mode: ScoreDisplayMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AuditDetails>,
}

impl AuditRecord {
    /// Items of the details table, if the audit has one
    pub fn items(&self) -> Option<&[DetailItem]> {
        self.details.as_ref()?.items.as_deref()
    }
}

/// How the analyzer intends an audit's score to be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDisplayMode {
    Binary,
    #[default]
    Numeric,
    Informative,
    NotApplicable,
    Manual,
    Error,
}

/// Optional itemized details attached to an audit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    /// Details kind reported by the analyzer (e.g. "table", "opportunity")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DetailItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_savings_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_savings_bytes: Option<f64>,
}

/// Score summary of a report category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub score: Option<f64>,
}
