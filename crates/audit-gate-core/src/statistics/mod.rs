//! Aggregation of per-run values into one representative value.
//!
//! Repeated runs of the same URL produce one value per run for every audit;
//! a merge method reduces them before the value is compared to a threshold.

pub mod merge;

// Re-export main types and functions
pub use merge::{aggregate, MergeMethod};
