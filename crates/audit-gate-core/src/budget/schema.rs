//! Budget schema and validation.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use super::path::validate_path;
use crate::utils::error::{ConfigError, InputError};

/// One budget, optionally scoped to a path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Budget {
    /// robots.txt-style path pattern; absent means every path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<BudgetOptions>,

    /// Transfer size limits in KB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_sizes: Option<Vec<ResourceBudget>>,

    /// Request count limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_counts: Option<Vec<ResourceBudget>>,

    /// Timing limits in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<Vec<TimingBudget>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BudgetOptions {
    /// Hostnames counted as first party, `*.` prefix allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_party_hostnames: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceBudget {
    pub resource_type: ResourceType,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimingBudget {
    pub metric: TimingMetric,
    pub budget: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Document,
    Font,
    Image,
    Media,
    Other,
    Script,
    Stylesheet,
    ThirdParty,
    Total,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Document => "document",
            ResourceType::Font => "font",
            ResourceType::Image => "image",
            ResourceType::Media => "media",
            ResourceType::Other => "other",
            ResourceType::Script => "script",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::ThirdParty => "third-party",
            ResourceType::Total => "total",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingMetric {
    FirstContentfulPaint,
    Interactive,
    FirstMeaningfulPaint,
    MaxPotentialFid,
    TotalBlockingTime,
    SpeedIndex,
    LargestContentfulPaint,
    CumulativeLayoutShift,
}

impl TimingMetric {
    /// Audit id that measures this metric
    pub fn as_str(&self) -> &'static str {
        match self {
            TimingMetric::FirstContentfulPaint => "first-contentful-paint",
            TimingMetric::Interactive => "interactive",
            TimingMetric::FirstMeaningfulPaint => "first-meaningful-paint",
            TimingMetric::MaxPotentialFid => "max-potential-fid",
            TimingMetric::TotalBlockingTime => "total-blocking-time",
            TimingMetric::SpeedIndex => "speed-index",
            TimingMetric::LargestContentfulPaint => "largest-contentful-paint",
            TimingMetric::CumulativeLayoutShift => "cumulative-layout-shift",
        }
    }
}

impl fmt::Display for TimingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse and validate a JSON array of budgets
///
/// # Errors
/// * `ConfigError::Malformed` - Not a budget array, or unknown properties
/// * Any error from [`validate_budgets`]
pub fn parse_budgets(json: &str) -> Result<Vec<Budget>, ConfigError> {
    let budgets: Vec<Budget> = serde_json::from_str(json)?;
    validate_budgets(&budgets)?;
    Ok(budgets)
}

/// Load and validate budgets from a JSON file
pub fn load_budgets(path: impl AsRef<Path>) -> Result<Vec<Budget>, InputError> {
    let path = path.as_ref();
    debug!("Reading budgets from: {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_budgets(&contents)?)
}

/// Check the semantic rules serde cannot express
///
/// # Errors
/// * `ConfigError::InvalidPath` - Malformed path pattern
/// * `ConfigError::DuplicateBudgetEntry` - Resource type or metric repeated in one list
/// * `ConfigError::InvalidBudgetValue` - Negative or non-finite budget
/// * `ConfigError::InvalidHostname` - Malformed first-party hostname
pub fn validate_budgets(budgets: &[Budget]) -> Result<(), ConfigError> {
    for budget in budgets {
        if let Some(path) = &budget.path {
            validate_path(path)?;
        }

        if let Some(hostnames) = budget
            .options
            .as_ref()
            .and_then(|o| o.first_party_hostnames.as_ref())
        {
            for hostname in hostnames {
                validate_hostname(hostname)?;
            }
        }

        if let Some(sizes) = &budget.resource_sizes {
            validate_resource_budgets(sizes, "resourceSizes")?;
        }
        if let Some(counts) = &budget.resource_counts {
            validate_resource_budgets(counts, "resourceCounts")?;
        }

        if let Some(timings) = &budget.timings {
            let mut seen = HashSet::new();
            for timing in timings {
                if !seen.insert(timing.metric) {
                    return Err(ConfigError::DuplicateBudgetEntry {
                        kind: "timings",
                        name: timing.metric.to_string(),
                    });
                }
                validate_budget_value(timing.metric.as_str(), timing.budget)?;
            }
        }
    }

    Ok(())
}

fn validate_resource_budgets(
    entries: &[ResourceBudget],
    kind: &'static str,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.resource_type) {
            return Err(ConfigError::DuplicateBudgetEntry {
                kind,
                name: entry.resource_type.to_string(),
            });
        }
        validate_budget_value(entry.resource_type.as_str(), entry.budget)?;
    }
    Ok(())
}

fn validate_budget_value(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidBudgetValue {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_hostname(hostname: &str) -> Result<(), ConfigError> {
    let invalid = hostname.is_empty()
        || hostname.contains('/')
        || hostname.contains(':')
        || (hostname.contains('*') && (!hostname.starts_with("*.") || hostname.rfind('*') != Some(0)));

    if invalid {
        return Err(ConfigError::InvalidHostname(hostname.to_string()));
    }
    Ok(())
}
