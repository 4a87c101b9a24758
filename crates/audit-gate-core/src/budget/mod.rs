//! Performance budgets and their conversion into assertions.
//!
//! A budget file declares resource size, resource count and timing limits,
//! optionally scoped to a robots.txt-style path. Budgets are validated as
//! soon as they are loaded and can be converted into an assertion matrix
//! that the assertion engine evaluates like any other configuration.
//!
//! # Example
//! ```ignore
//! use audit_gate_core::budget::{load_budgets, budgets_to_assertions};
//!
//! let budgets = load_budgets("budget.json")?;
//! let matrix = budgets_to_assertions(&budgets)?;
//! ```

mod convert;
mod path;
mod schema;

// Public API exports
pub use convert::{budgets_to_assertions, budgets_to_config};
pub use path::{matches_path, path_to_pattern, validate_path};
pub use schema::{
    load_budgets, parse_budgets, validate_budgets, Budget, BudgetOptions, ResourceBudget,
    ResourceType, TimingBudget, TimingMetric,
};
