//! Terminal output rendering for assertion results.

use super::config::AssertionLevel;
use super::results::{AssertionResult, AssertionSummary};
use colored::*;

/// Render a human-readable summary of assertion results for the terminal
pub fn render_terminal_results(results: &[AssertionResult], summary: &AssertionSummary) -> String {
    let mut out = String::new();

    out.push_str("\n🔍 ");
    out.push_str(&"Assertion Results".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");

    let mut current_url: Option<&str> = None;
    for result in results {
        if current_url != Some(result.url.as_str()) {
            out.push_str(&format!("{}\n", result.url.cyan()));
            current_url = Some(result.url.as_str());
        }
        out.push_str(&render_result(result));
    }

    out.push_str(&render_status(summary));
    out
}

fn render_result(result: &AssertionResult) -> String {
    let symbol = match (result.passed, result.level) {
        (true, _) => "✅",
        (false, AssertionLevel::Error) => "❌",
        (false, _) => "⚠️ ",
    };

    let target = match &result.audit_property {
        Some(property) => format!("{}.{}", result.audit_id, property),
        None => result.audit_id.clone(),
    };

    format!(
        "  {} {} {}: expected {} {}, found {}\n",
        symbol,
        target.bold(),
        result.name.as_str(),
        result.operator.as_str(),
        result.expected,
        result.actual
    )
}

fn render_status(summary: &AssertionSummary) -> String {
    let mut out = String::new();
    out.push_str("---------------------------------------------------\n");
    let status_msg = match summary.status.as_str() {
        "FAILED" => format!(
            "❌ STATUS: FAILED ({} errors, {} warnings)",
            summary.error_count, summary.warning_count
        )
        .red()
        .bold(),
        "WARNING" => format!("⚠️  STATUS: WARNING ({} warnings)", summary.warning_count)
            .yellow()
            .bold(),
        _ => "✅ STATUS: PASSED".green().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}
