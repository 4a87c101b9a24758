//! Assertion evaluation against repeated report runs.
//!
//! This module resolves assertion configuration (flat, preset-based or
//! per-URL matrix), merges per-run values and reports every assertion whose
//! threshold is violated.
//!
//! # Example
//! ```ignore
//! use audit_gate_core::assertions::{create_summary, evaluate, load_assert_config};
//! use audit_gate_core::report::read_reports;
//!
//! let config = load_assert_config("lighthouserc.json")?;
//! let reports = read_reports(&paths)?;
//! let results = evaluate(&config, &reports)?;
//! let summary = create_summary(&results);
//! ```

mod budget_audit;
mod config;
mod engine;
mod output;
mod presets;
mod results;

// Public API exports
pub use budget_audit::{classify_details, DetailsShape};
pub use config::{
    load_assert_config, normalize_audit_key, normalize_spec, AssertConfig, AssertionGroup,
    AssertionLevel, AssertionMatrixEntry, AssertionOptions, AssertionSetting, AssertionSpec,
    AssertionTarget, NormalizedAssertion, ResolvedConfig, ResourceMetric, Threshold,
};
pub use engine::{evaluate, evaluate_resolved};
pub use output::render_terminal_results;
pub use presets::{preset_spec, PRESET_ALL, PRESET_NO_PWA, PRESET_RECOMMENDED};
pub use results::{create_summary, AssertionName, AssertionResult, AssertionSummary, Operator};
