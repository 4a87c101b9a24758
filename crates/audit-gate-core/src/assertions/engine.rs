//! Assertion evaluation engine.
//!
//! Groups reports by URL, selects the assertions that apply to each URL and
//! checks every configured audit against its threshold.

use log::debug;
use serde_json::Value;

use super::budget_audit::{budget_shape, expand_budget_audit, DetailsShape};
use super::config::{
    AssertConfig, AssertionLevel, AssertionTarget, NormalizedAssertion, ResolvedConfig,
    ResourceMetric, Threshold,
};
use super::results::{AssertionName, AssertionResult, Operator};
use crate::report::{AuditRecord, ReportDocument, ScoreDisplayMode};
use crate::statistics::{aggregate, MergeMethod};
use crate::utils::config::RESOURCE_SUMMARY_AUDIT_ID;
use crate::utils::error::ConfigError;

/// What one run contributes to an assertion
#[derive(Debug, Clone, Copy, PartialEq)]
enum Observation {
    /// The audit is absent from the report
    Missing,
    /// Not applicable to this run; never a failure
    Skipped,
    Value(f64),
    /// The audit ran but produced no usable value
    Unusable,
}

impl Observation {
    fn ran(&self) -> bool {
        matches!(self, Observation::Value(_) | Observation::Skipped)
    }

    fn raw_value(&self) -> f64 {
        match self {
            Observation::Value(v) => *v,
            _ => f64::NAN,
        }
    }
}

/// Evaluate an assertion configuration against a set of reports
///
/// # Arguments
/// * `config` - Assertion configuration (flat, preset-based or matrix)
/// * `reports` - One report per run; several runs may share a URL
///
/// # Returns
/// Failing assertion results (and passing ones when
/// `includePassedAssertions` is set), grouped by URL in order of first
/// appearance
///
/// # Errors
/// * Any configuration error from [`ResolvedConfig::resolve`]; nothing is
///   evaluated when the configuration is invalid
///
/// # Example
/// ```ignore
/// let results = evaluate(&config, &reports)?;
/// let summary = create_summary(&results);
/// ```
pub fn evaluate(
    config: &AssertConfig,
    reports: &[ReportDocument],
) -> Result<Vec<AssertionResult>, ConfigError> {
    let resolved = ResolvedConfig::resolve(config)?;
    Ok(evaluate_resolved(
        &resolved,
        reports,
        config.include_passed_assertions,
    ))
}

/// Evaluate an already resolved configuration
pub fn evaluate_resolved(
    config: &ResolvedConfig,
    reports: &[ReportDocument],
    include_passed: bool,
) -> Vec<AssertionResult> {
    let mut results = Vec::new();

    for (url, runs) in group_by_url(reports) {
        let Some(assertions) = config.assertions_for_url(url) else {
            debug!("No assertions apply to {}", url);
            continue;
        };

        debug!(
            "Evaluating {} assertion(s) against {} run(s) of {}",
            assertions.len(),
            runs.len(),
            url
        );

        for assertion in assertions {
            if assertion.level == AssertionLevel::Off {
                continue;
            }
            results.extend(evaluate_assertion(url, assertion, &runs, include_passed));
        }
    }

    results
}

/// Partition reports by final URL, preserving first-appearance and run order
fn group_by_url(reports: &[ReportDocument]) -> Vec<(&str, Vec<&ReportDocument>)> {
    let mut groups: Vec<(&str, Vec<&ReportDocument>)> = Vec::new();

    for report in reports {
        match groups.iter_mut().find(|(url, _)| *url == report.final_url) {
            Some((_, runs)) => runs.push(report),
            None => groups.push((report.final_url.as_str(), vec![report])),
        }
    }

    groups
}

fn evaluate_assertion(
    url: &str,
    assertion: &NormalizedAssertion,
    runs: &[&ReportDocument],
    include_passed: bool,
) -> Vec<AssertionResult> {
    if let AssertionTarget::Audit(audit_id) = &assertion.target {
        let records = runs.iter().filter_map(|run| run.audit(audit_id));
        let shape = budget_shape(audit_id, records.clone());
        if shape != DetailsShape::Generic {
            return expand_budget_audit(audit_id, url, assertion.level, shape, records);
        }
    }

    let observations: Vec<Observation> = runs
        .iter()
        .map(|run| observe(run, &assertion.target, &assertion.threshold))
        .collect();

    check_observations(url, assertion, &observations, include_passed)
        .into_iter()
        .collect()
}

fn check_observations(
    url: &str,
    assertion: &NormalizedAssertion,
    observations: &[Observation],
    include_passed: bool,
) -> Option<AssertionResult> {
    if observations.iter().all(|o| *o == Observation::Missing) {
        return Some(audit_ran_failure(url, assertion, observations));
    }
    if observations.iter().all(|o| *o == Observation::Skipped) {
        return None;
    }

    let incomplete = observations
        .iter()
        .any(|o| matches!(o, Observation::Missing | Observation::Unusable));
    if incomplete && assertion.merge_method == MergeMethod::Pessimistic {
        debug!(
            "{} has runs without a usable value; pessimistic merge fails it",
            assertion.key
        );
        return Some(audit_ran_failure(url, assertion, observations));
    }

    let name = AssertionName::from(&assertion.threshold);
    let values: Vec<f64> = observations.iter().map(Observation::raw_value).collect();

    let Ok(actual) = aggregate(&values, assertion.merge_method, name.as_str()) else {
        return Some(audit_ran_failure(url, assertion, observations));
    };

    let passed = assertion.threshold.passes(actual);
    if passed && !include_passed {
        return None;
    }

    Some(AssertionResult {
        audit_id: assertion.target.audit_id(),
        url: url.to_string(),
        name,
        operator: Operator::from(name),
        expected: assertion.threshold.expected(),
        actual,
        values,
        level: assertion.level,
        audit_property: assertion.target.audit_property(),
        passed,
    })
}

fn audit_ran_failure(
    url: &str,
    assertion: &NormalizedAssertion,
    observations: &[Observation],
) -> AssertionResult {
    AssertionResult {
        audit_id: assertion.target.audit_id(),
        url: url.to_string(),
        name: AssertionName::AuditRan,
        operator: Operator::from(AssertionName::AuditRan),
        expected: 1.0,
        actual: 0.0,
        values: observations
            .iter()
            .map(|o| if o.ran() { 1.0 } else { 0.0 })
            .collect(),
        level: assertion.level,
        audit_property: assertion.target.audit_property(),
        passed: false,
    }
}

fn observe(report: &ReportDocument, target: &AssertionTarget, threshold: &Threshold) -> Observation {
    match target {
        AssertionTarget::Audit(audit_id) => match report.audit(audit_id) {
            Some(record) => observe_audit(record, threshold),
            None => Observation::Missing,
        },
        AssertionTarget::Category(category_id) => match report.category(category_id) {
            Some(category) => match category.score {
                Some(score) if score.is_finite() => Observation::Value(score),
                _ => Observation::Unusable,
            },
            None => Observation::Missing,
        },
        AssertionTarget::ResourceSummary {
            resource_type,
            metric,
        } => observe_resource_summary(report, resource_type, *metric),
    }
}

fn observe_audit(record: &AuditRecord, threshold: &Threshold) -> Observation {
    match record.score_display_mode {
        ScoreDisplayMode::NotApplicable | ScoreDisplayMode::Manual => return Observation::Skipped,
        ScoreDisplayMode::Error => return Observation::Unusable,
        _ => {}
    }
    let informative = record.score_display_mode == ScoreDisplayMode::Informative;

    match threshold {
        Threshold::MinScore(_) => match record.score {
            Some(score) if score.is_finite() => Observation::Value(score),
            _ if informative => Observation::Value(0.0),
            _ => Observation::Unusable,
        },
        Threshold::MaxLength(_) => {
            Observation::Value(record.items().map_or(0, |items| items.len()) as f64)
        }
        Threshold::MaxNumericValue(_) => match record.numeric_value {
            Some(value) if value.is_finite() => Observation::Value(value),
            None if informative => Observation::Skipped,
            _ => Observation::Unusable,
        },
    }
}

fn observe_resource_summary(
    report: &ReportDocument,
    resource_type: &str,
    metric: ResourceMetric,
) -> Observation {
    let Some(record) = report.audit(RESOURCE_SUMMARY_AUDIT_ID) else {
        return Observation::Missing;
    };

    let row = record.items().and_then(|items| {
        items
            .iter()
            .find(|item| item.get("resourceType").and_then(Value::as_str) == Some(resource_type))
    });
    let Some(row) = row else {
        return Observation::Missing;
    };

    let value = match metric {
        ResourceMetric::Size => row
            .get("transferSize")
            .or_else(|| row.get("size"))
            .and_then(Value::as_f64),
        ResourceMetric::Count => row.get("requestCount").and_then(Value::as_f64),
    };

    match value {
        Some(v) if v.is_finite() => Observation::Value(v),
        _ => Observation::Unusable,
    }
}
