//! Assert command implementation.
//! Loads reports and configuration, evaluates assertions and reports failures.

use super::models::{AssertArgs, AssertionReport};
use crate::assertions::{
    create_summary, evaluate, load_assert_config, render_terminal_results, AssertConfig,
};
use crate::budget::{budgets_to_config, load_budgets};
use crate::report::read_reports;
use crate::utils::config::OUTPUT_SCHEMA_VERSION;
use crate::utils::error::ConfigError;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::*;
use log::info;
use std::fs;

/// Build the assertion configuration from either a config file or a budget file
pub fn load_config(args: &AssertArgs) -> Result<AssertConfig> {
    match (&args.config, &args.budgets) {
        (Some(_), Some(_)) => Err(ConfigError::AmbiguousConfiguration.into()),
        (Some(path), None) => {
            load_assert_config(path).context("Failed to load assertion configuration")
        }
        (None, Some(path)) => {
            let budgets = load_budgets(path).context("Failed to load budgets")?;
            info!("Converted {} budget(s) into assertions", budgets.len());
            Ok(budgets_to_config(&budgets)?)
        }
        (None, None) => bail!("Either --config or --budgets must be supplied"),
    }
}

/// Execute the assert command
pub fn execute_assert(args: AssertArgs) -> Result<AssertionReport> {
    // Step 1: Configuration errors stop everything before reports are read
    let config = load_config(&args)?;

    // Step 2: Load reports
    let reports = read_reports(&args.reports).context("Failed to read reports")?;

    // Step 3: Evaluate
    let results = evaluate(&config, &reports).context("Invalid assertion configuration")?;
    let summary = create_summary(&results);

    let report = AssertionReport {
        version: OUTPUT_SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        results,
        summary,
    };

    // Step 4: Write output if requested
    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).context("Failed to write assertion results JSON")?;
        println!(
            "📊 Assertion results written to {}",
            path.display().to_string().cyan()
        );
    }

    // Step 5: Terminal summary
    if args.summary {
        println!("{}", render_terminal_results(&report.results, &report.summary));
    }

    if report.summary.has_regressions {
        bail!(
            "{} error-level assertion(s) failed",
            report.summary.error_count
        );
    }

    Ok(report)
}
