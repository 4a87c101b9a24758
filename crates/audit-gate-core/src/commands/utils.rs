use crate::budget::load_budgets;
use crate::utils::config::OUTPUT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a budget JSON file
pub fn validate_budgets_file(file_path: &Path) -> Result<()> {
    println!("Validating budgets: {}", file_path.display());

    let budgets = load_budgets(file_path)?;

    println!("✓ Valid budget file");
    println!("  Budgets: {}", budgets.len());
    for budget in &budgets {
        println!(
            "  {}: {} timing(s), {} count(s), {} size(s)",
            budget.path.as_deref().unwrap_or("(all paths)"),
            budget.timings.as_ref().map_or(0, Vec::len),
            budget.resource_counts.as_ref().map_or(0, Vec::len),
            budget.resource_sizes.as_ref().map_or(0, Vec::len),
        );
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Audit Gate v{}", env!("CARGO_PKG_VERSION"));
    println!("Output Schema: v{}", OUTPUT_SCHEMA_VERSION);
    println!();
    println!("Assertion and diff tooling for web performance audit reports.");
}
