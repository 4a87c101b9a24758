//! Diff command implementation.
//! Orchestrates the comparison of two reports and prints labelled diffs.

use super::models::{DiffArgs, DiffReport};
use crate::diff::{find_audit_diffs, find_report_diffs, render_terminal_diff, DiffOptions};
use crate::report::read_report;
use crate::utils::config::OUTPUT_SCHEMA_VERSION;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use colored::*;
use std::fs;

/// Execute the diff command
pub fn execute_diff(args: DiffArgs) -> Result<DiffReport> {
    // Step 1: Load reports
    let base = read_report(&args.base).context("Failed to read base report")?;
    let compare = read_report(&args.compare).context("Failed to read compare report")?;

    // Step 2: Percent on the command line, fraction in the finder
    let options = DiffOptions {
        percent_absolute_delta_threshold: args.threshold_percent.unwrap_or(0.0) / 100.0,
    };

    // Step 3: Compute diffs
    let diffs = match &args.audit {
        Some(audit_id) => {
            let base_audit = base
                .audit(audit_id)
                .ok_or_else(|| anyhow!("Audit {} not found in base report", audit_id))?;
            let compare_audit = compare
                .audit(audit_id)
                .ok_or_else(|| anyhow!("Audit {} not found in compare report", audit_id))?;
            find_audit_diffs(audit_id, base_audit, compare_audit, &options)
                .context("Failed to compare audits")?
        }
        None => find_report_diffs(&base, &compare, &options),
    };

    let report = DiffReport {
        version: OUTPUT_SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        base_url: base.final_url,
        compare_url: compare.final_url,
        diffs,
    };

    // Step 4: Write output if requested
    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).context("Failed to write diff JSON")?;
        println!(
            "📊 Diff written to {}",
            path.display().to_string().cyan()
        );
    }

    // Step 5: Terminal summary
    if args.summary {
        println!(
            "{}",
            render_terminal_diff(&report.diffs, &report.base_url, &report.compare_url)
        );
    }

    Ok(report)
}
