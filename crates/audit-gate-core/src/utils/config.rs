//! Constants shared by the assertion engine, budget converter and diff finder.

/// Threshold used when an assertion names no explicit expectation
pub const DEFAULT_MIN_SCORE: f64 = 1.0;

// Budgets express sizes in KB, assertions compare bytes
pub const BYTES_PER_KB: f64 = 1024.0;

/// Audit that summarizes request counts and transfer sizes per resource type
pub const RESOURCE_SUMMARY_AUDIT_ID: &str = "resource-summary";

// Audits that report resource and timing budgets row by row
pub const PERFORMANCE_BUDGET_AUDIT_ID: &str = "performance-budget";
pub const TIMING_BUDGET_AUDIT_ID: &str = "timing-budget";

/// Prefix of assertion keys that target category scores
pub const CATEGORY_KEY_PREFIX: &str = "categories";

/// Path assumed when a budget does not name one
pub const DEFAULT_BUDGET_PATH: &str = "/";

/// Current schema version of the JSON envelopes written by the CLI
pub const OUTPUT_SCHEMA_VERSION: &str = "1.0.0";

// Item fields that identify a row in an audit's details table, in priority order.
// Dotted entries address one level of nesting (e.g. `node.selector`).
pub const ITEM_KEY_FIELDS: &[&str] = &[
    "url",
    "source.url",
    "node.path",
    "node.selector",
    "label",
    "groupLabel",
    "resourceType",
    "metric",
    "entity",
    "name",
];
