//! Conversion of budgets into an assertion matrix.

use log::debug;

use super::path::path_to_pattern;
use super::schema::{validate_budgets, Budget};
use crate::assertions::{
    AssertConfig, AssertionLevel, AssertionMatrixEntry, AssertionOptions, AssertionSetting,
    AssertionSpec,
};
use crate::utils::config::{BYTES_PER_KB, RESOURCE_SUMMARY_AUDIT_ID};
use crate::utils::error::ConfigError;

/// Convert budgets into assertion matrix entries, one per budget, in order
///
/// Budgets are validated first. When several entries match a URL the
/// assertion engine applies the last one, so a path-scoped budget listed
/// after a general budget overrides it.
///
/// # Errors
/// * Any error from [`validate_budgets`]
pub fn budgets_to_assertions(budgets: &[Budget]) -> Result<Vec<AssertionMatrixEntry>, ConfigError> {
    validate_budgets(budgets)?;

    let entries: Vec<AssertionMatrixEntry> = budgets.iter().map(budget_to_entry).collect();
    debug!("Converted {} budget(s) into assertion matrix entries", entries.len());

    Ok(entries)
}

/// Convert budgets into a complete assertion configuration
pub fn budgets_to_config(budgets: &[Budget]) -> Result<AssertConfig, ConfigError> {
    Ok(AssertConfig::from_matrix(budgets_to_assertions(budgets)?))
}

fn budget_to_entry(budget: &Budget) -> AssertionMatrixEntry {
    let mut assertions = AssertionSpec::new();

    for timing in budget.timings.iter().flatten() {
        assertions.insert(timing.metric.as_str(), max_numeric_value(timing.budget));
    }

    for count in budget.resource_counts.iter().flatten() {
        assertions.insert(
            format!("{}:{}:count", RESOURCE_SUMMARY_AUDIT_ID, count.resource_type),
            max_numeric_value(count.budget),
        );
    }

    for size in budget.resource_sizes.iter().flatten() {
        assertions.insert(
            format!("{}:{}:size", RESOURCE_SUMMARY_AUDIT_ID, size.resource_type),
            max_numeric_value(size.budget * BYTES_PER_KB),
        );
    }

    AssertionMatrixEntry {
        matching_url_pattern: path_to_pattern(budget.path.as_deref()),
        preset: None,
        assertions,
    }
}

fn max_numeric_value(value: f64) -> AssertionSetting {
    AssertionSetting::WithOptions(
        AssertionLevel::Error,
        AssertionOptions {
            max_numeric_value: Some(value),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::schema::parse_budgets;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resource_size_converts_to_bytes() {
        let budgets =
            parse_budgets(r#"[{"resourceSizes": [{"resourceType": "script", "budget": 123}]}]"#)
                .unwrap();
        let entries = budgets_to_assertions(&budgets).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].matching_url_pattern, path_to_pattern(None));
        assert_eq!(
            entries[0].assertions.get("resource-summary:script:size"),
            Some(&max_numeric_value(125952.0))
        );
    }

    #[test]
    fn test_counts_and_timings() {
        let budgets = parse_budgets(
            r#"[{
                "path": "/shop",
                "resourceCounts": [{"resourceType": "third-party", "budget": 5}],
                "timings": [{"metric": "first-contentful-paint", "budget": 2000}]
            }]"#,
        )
        .unwrap();
        let entries = budgets_to_assertions(&budgets).unwrap();

        let keys: Vec<&str> = entries[0].assertions.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["first-contentful-paint", "resource-summary:third-party:count"]
        );
        assert_eq!(
            entries[0].assertions.get("first-contentful-paint"),
            Some(&max_numeric_value(2000.0))
        );
        assert_eq!(entries[0].matching_url_pattern, path_to_pattern(Some("/shop")));
    }

    #[test]
    fn test_entries_follow_budget_order() {
        let budgets = parse_budgets(
            r#"[
                {"timings": [{"metric": "interactive", "budget": 5000}]},
                {"path": "/blog", "timings": [{"metric": "interactive", "budget": 3000}]}
            ]"#,
        )
        .unwrap();
        let config = budgets_to_config(&budgets).unwrap();
        let matrix = config.assert_matrix.unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[1].matching_url_pattern, path_to_pattern(Some("/blog")));
        assert!(config.assertions.is_none());
    }

    #[test]
    fn test_invalid_budgets_fail_conversion() {
        let budgets = vec![Budget {
            path: Some("/a$b".to_string()),
            ..Default::default()
        }];
        assert!(matches!(
            budgets_to_assertions(&budgets),
            Err(ConfigError::InvalidPath { .. })
        ));
    }
}
