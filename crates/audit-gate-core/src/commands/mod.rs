//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod assert;
pub mod diff;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use assert::{execute_assert, load_config};
pub use diff::execute_diff;
pub use models::{AssertArgs, AssertionReport, DiffArgs, DiffReport};
pub use utils::{display_version, validate_budgets_file};
