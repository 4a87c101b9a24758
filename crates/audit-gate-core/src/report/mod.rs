//! Report documents produced by the external performance analyzer.
//!
//! This module defines the subset of the report format the core reads
//! and the helpers that load reports from disk.

pub mod json;
pub mod schema;

// Re-export main types and functions
pub use json::{read_report, read_reports};
pub use schema::{AuditDetails, AuditRecord, CategoryResult, DetailItem, ReportDocument, ScoreDisplayMode};
