//! Assertion results and their summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{AssertionLevel, Threshold};

/// Property an assertion result checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssertionName {
    AuditRan,
    MinScore,
    MaxLength,
    MaxNumericValue,
}

impl AssertionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssertionName::AuditRan => "auditRan",
            AssertionName::MinScore => "minScore",
            AssertionName::MaxLength => "maxLength",
            AssertionName::MaxNumericValue => "maxNumericValue",
        }
    }
}

impl fmt::Display for AssertionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Threshold> for AssertionName {
    fn from(threshold: &Threshold) -> Self {
        match threshold {
            Threshold::MinScore(_) => AssertionName::MinScore,
            Threshold::MaxLength(_) => AssertionName::MaxLength,
            Threshold::MaxNumericValue(_) => AssertionName::MaxNumericValue,
        }
    }
}

/// Comparison an assertion applies between actual and expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::AtLeast => ">=",
            Operator::AtMost => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssertionName> for Operator {
    fn from(name: AssertionName) -> Self {
        match name {
            AssertionName::AuditRan | AssertionName::MinScore => Operator::AtLeast,
            AssertionName::MaxLength | AssertionName::MaxNumericValue => Operator::AtMost,
        }
    }
}

/// Outcome of checking one assertion against one URL's runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    pub audit_id: String,

    /// Final URL of the report group
    pub url: String,

    pub name: AssertionName,

    pub operator: Operator,

    pub expected: f64,

    pub actual: f64,

    /// One value per contributing run, in report order (NaN when a run had none)
    pub values: Vec<f64>,

    pub level: AssertionLevel,

    /// Sub-property checked, for budget expansions (e.g. "script.size")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_property: Option<String>,

    pub passed: bool,
}

/// Summary of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionSummary {
    /// Whether any error-level assertion failed
    pub has_regressions: bool,

    pub error_count: usize,

    pub warning_count: usize,

    pub passed_count: usize,

    /// Overall status: "PASSED", "FAILED", "WARNING"
    pub status: String,
}

/// Create summary based on assertion results
pub fn create_summary(results: &[AssertionResult]) -> AssertionSummary {
    let failed = |level: AssertionLevel| {
        results
            .iter()
            .filter(|r| !r.passed && r.level == level)
            .count()
    };
    let error_count = failed(AssertionLevel::Error);
    let warning_count = failed(AssertionLevel::Warn);
    let passed_count = results.iter().filter(|r| r.passed).count();

    let status = if error_count > 0 {
        "FAILED"
    } else if warning_count > 0 {
        "WARNING"
    } else {
        "PASSED"
    };

    AssertionSummary {
        has_regressions: error_count > 0,
        error_count,
        warning_count,
        passed_count,
        status: status.to_string(),
    }
}
