//! Merge methods for repeated-run values.
//!
//! `optimistic` and `pessimistic` are relative to the direction of the
//! property being asserted: for `min*` properties higher is better, for
//! `max*` properties lower is better.

use crate::utils::error::StatisticsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistical rule used to reduce per-run values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Median,
    /// Most favorable value for the asserted property
    #[default]
    Optimistic,
    /// Least favorable value for the asserted property
    Pessimistic,
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeMethod::Median => "median",
            MergeMethod::Optimistic => "optimistic",
            MergeMethod::Pessimistic => "pessimistic",
        };
        f.write_str(name)
    }
}

/// Aggregate per-run values with the given merge method
///
/// Non-finite values are dropped before aggregating.
///
/// # Arguments
/// * `values` - One value per run, in any order
/// * `method` - Merge method to apply
/// * `property_name` - Asserted property (`minScore`, `maxLength`, ...);
///   its `min`/`max` prefix decides what optimistic and pessimistic mean
///
/// # Errors
/// * `StatisticsError::AllRunsFailed` - No finite value remains
pub fn aggregate(
    values: &[f64],
    method: MergeMethod,
    property_name: &str,
) -> Result<f64, StatisticsError> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    if finite.is_empty() {
        return Err(StatisticsError::AllRunsFailed {
            property: property_name.to_string(),
        });
    }

    if finite.len() != values.len() {
        debug!(
            "Dropped {} non-finite value(s) for {}",
            values.len() - finite.len(),
            property_name
        );
    }

    let value = match method {
        MergeMethod::Median => {
            finite.sort_by(f64::total_cmp);
            median_sorted(&finite)
        }
        MergeMethod::Optimistic | MergeMethod::Pessimistic => {
            let use_min = (method == MergeMethod::Optimistic && property_name.starts_with("max"))
                || (method == MergeMethod::Pessimistic && property_name.starts_with("min"));
            if use_min {
                finite.iter().copied().fold(f64::INFINITY, f64::min)
            } else {
                finite.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            }
        }
    };

    Ok(value)
}

fn median_sorted(sorted: &[f64]) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let mid = (n - 1) / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid] + sorted[mid + 1]) / 2.0
    }
}
