//! Structural diffs between two reports.
//!
//! This module compares one audit (or every audit) of a base report with
//! the same audit of a compare report and produces a flat list of typed
//! differences, reconciling detail-table rows by identifying key.
//!
//! # Example
//! ```ignore
//! use audit_gate_core::diff::{find_report_diffs, DiffOptions};
//! use audit_gate_core::report::read_report;
//!
//! let base = read_report("base.json")?;
//! let compare = read_report("compare.json")?;
//! let diffs = find_report_diffs(&base, &compare, &DiffOptions::default());
//! ```

mod engine;
mod normalizer;
mod output;
mod schema;

// Public API exports
pub use engine::{find_audit_diffs, find_report_diffs};
pub use normalizer::{item_keys, match_items, ItemMatch};
pub use output::render_terminal_diff;
pub use schema::{AuditDiff, DiffLabel, DiffOptions, DiffType};

pub use crate::utils::error::DiffError;

#[cfg(test)]
mod tests;
