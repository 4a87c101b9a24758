use crate::assertions::{AssertionResult, AssertionSummary};
use crate::diff::AuditDiff;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments for the assert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AssertArgs {
    /// Report files, or directories of report files
    pub reports: Vec<PathBuf>,

    /// Assertion configuration (JSON or TOML)
    pub config: Option<PathBuf>,

    /// Budget file to convert into assertions
    pub budgets: Option<PathBuf>,

    /// Path to write the results JSON
    pub output: Option<PathBuf>,

    /// Print a human-readable summary to the terminal
    pub summary: bool,
}

/// Arguments for the diff command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffArgs {
    /// Path to the base report JSON
    pub base: PathBuf,

    /// Path to the compare report JSON
    pub compare: PathBuf,

    /// Restrict the comparison to one audit id
    pub audit: Option<String>,

    /// Minimum change in percent for numeric diffs (e.g., 5.0)
    pub threshold_percent: Option<f64>,

    /// Print a human-readable summary to the terminal
    pub summary: bool,

    /// Path to write the diff JSON
    pub output: Option<PathBuf>,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            base: PathBuf::new(),
            compare: PathBuf::new(),
            audit: None,
            threshold_percent: None,
            summary: true,
            output: None,
        }
    }
}

/// JSON envelope written by the assert command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionReport {
    pub version: String,

    /// RFC 3339 timestamp
    pub generated_at: String,

    pub results: Vec<AssertionResult>,

    pub summary: AssertionSummary,
}

/// JSON envelope written by the diff command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub version: String,

    /// RFC 3339 timestamp
    pub generated_at: String,

    pub base_url: String,

    pub compare_url: String,

    pub diffs: Vec<AuditDiff>,
}
