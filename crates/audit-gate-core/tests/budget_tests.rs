use audit_gate_core::assertions::{AssertionLevel, AssertionSetting};
use audit_gate_core::budget::{
    budgets_to_assertions, load_budgets, matches_path, parse_budgets, path_to_pattern,
    ResourceType, TimingMetric,
};
use audit_gate_core::utils::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

const BUDGETS: &str = r#"[
    {
        "resourceSizes": [{ "resourceType": "script", "budget": 125 }],
        "resourceCounts": [{ "resourceType": "third-party", "budget": 10 }],
        "timings": [{ "metric": "interactive", "budget": 5000 }]
    },
    {
        "path": "/checkout*",
        "options": { "firstPartyHostnames": ["*.shop.example", "shop.example"] },
        "timings": [{ "metric": "interactive", "budget": 3000 }]
    }
]"#;

#[test]
fn test_load_budgets_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BUDGETS.as_bytes()).unwrap();

    let budgets = load_budgets(file.path()).unwrap();
    assert_eq!(budgets.len(), 2);
    assert_eq!(
        budgets[0].resource_sizes.as_ref().unwrap()[0].resource_type,
        ResourceType::Script
    );
    assert_eq!(
        budgets[1].timings.as_ref().unwrap()[0].metric,
        TimingMetric::Interactive
    );
}

#[test]
fn test_budgets_convert_to_matrix() {
    let budgets = parse_budgets(BUDGETS).unwrap();
    let matrix = budgets_to_assertions(&budgets).unwrap();

    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix[0].matching_url_pattern, path_to_pattern(None));

    let keys: Vec<&str> = matrix[0].assertions.iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        vec![
            "interactive",
            "resource-summary:third-party:count",
            "resource-summary:script:size",
        ]
    );

    match matrix[0].assertions.get("resource-summary:script:size") {
        Some(AssertionSetting::WithOptions(level, options)) => {
            assert_eq!(*level, AssertionLevel::Error);
            assert_eq!(options.max_numeric_value, Some(125.0 * 1024.0));
        }
        other => panic!("unexpected setting: {:?}", other),
    }
}

#[test]
fn test_invalid_budgets_are_rejected() {
    let unknown_type = r#"[{ "resourceSizes": [{ "resourceType": "videos", "budget": 1 }] }]"#;
    assert!(matches!(
        parse_budgets(unknown_type),
        Err(ConfigError::Malformed(_))
    ));

    let bad_path = r#"[{ "path": "checkout", "timings": [] }]"#;
    assert!(matches!(
        parse_budgets(bad_path),
        Err(ConfigError::InvalidPath { .. })
    ));

    let duplicate = r#"[{ "resourceCounts": [
        { "resourceType": "font", "budget": 1 },
        { "resourceType": "font", "budget": 2 }
    ] }]"#;
    assert!(matches!(
        parse_budgets(duplicate),
        Err(ConfigError::DuplicateBudgetEntry { .. })
    ));

    let negative = r#"[{ "timings": [{ "metric": "speed-index", "budget": -1 }] }]"#;
    assert!(matches!(
        parse_budgets(negative),
        Err(ConfigError::InvalidBudgetValue { .. })
    ));
}

#[test]
fn test_path_matching() {
    assert!(matches_path("https://shop.example/checkout/pay", Some("/checkout*")));
    assert!(matches_path("https://shop.example/anything", None));
    assert!(!matches_path("https://shop.example/cart", Some("/checkout")));
    assert!(matches_path("https://shop.example/index.html", Some("/*.html$")));
    assert!(!matches_path("https://shop.example/index.html?x=1", Some("/*.html$")));
}
