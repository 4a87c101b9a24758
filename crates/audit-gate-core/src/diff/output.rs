//! Terminal output rendering for audit diffs.
//!
//! Provides a human-readable listing of report comparisons
//! with visual cues (emojis) for regressions and improvements.

use super::schema::{AuditDiff, DiffLabel};
use colored::*;

/// Render a human-readable summary of a list of diffs for the terminal
pub fn render_terminal_diff(diffs: &[AuditDiff], base_url: &str, compare_url: &str) -> String {
    let mut out = String::new();

    out.push_str(&render_header(base_url, compare_url));
    for diff in diffs {
        out.push_str(&render_diff(diff));
    }
    out.push_str(&render_status(diffs));

    out
}

fn render_header(base_url: &str, compare_url: &str) -> String {
    let mut out = String::new();
    out.push_str("\n📊 ");
    out.push_str(&"Report Comparison".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Base:    {}\n", base_url));
    out.push_str(&format!("Compare: {}\n", compare_url));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_diff(diff: &AuditDiff) -> String {
    let symbol = get_label_symbol(diff.label());
    let detail = match diff {
        AuditDiff::Error {
            attempted_type,
            base_value,
            compare_value,
            ..
        } => format!(
            "cannot compare {}: {} -> {}",
            attempted_type,
            format_optional(*base_value),
            format_optional(*compare_value)
        ),
        AuditDiff::Score {
            base_value,
            compare_value,
            ..
        } => format!(
            "score {} -> {}",
            format_optional(*base_value),
            format_optional(*compare_value)
        ),
        AuditDiff::NumericValue {
            base_value,
            compare_value,
            ..
        } => format!(
            "value {} -> {} ({})",
            base_value,
            compare_value,
            format_percent(*base_value, *compare_value)
        ),
        AuditDiff::DisplayValue {
            base_value,
            compare_value,
            ..
        } => format!(
            "display \"{}\" -> \"{}\"",
            base_value.as_deref().unwrap_or(""),
            compare_value.as_deref().unwrap_or("")
        ),
        AuditDiff::ItemCount {
            base_value,
            compare_value,
            ..
        } => format!("items {} -> {}", base_value, compare_value),
        AuditDiff::ItemAddition {
            compare_item_index, ..
        } => format!("item #{} added", compare_item_index),
        AuditDiff::ItemRemoval { base_item_index, .. } => {
            format!("item #{} removed", base_item_index)
        }
        AuditDiff::ItemDelta {
            base_item_index,
            item_key,
            base_value,
            compare_value,
            ..
        } => format!(
            "item #{} {}: {} -> {} ({})",
            base_item_index,
            item_key,
            base_value,
            compare_value,
            format_percent(*base_value, *compare_value)
        ),
    };

    format!("  {} {}: {}\n", symbol, diff.audit_id().bold(), detail)
}

fn render_status(diffs: &[AuditDiff]) -> String {
    let regressions = diffs
        .iter()
        .filter(|diff| diff.label() == DiffLabel::Regression)
        .count();
    let improvements = diffs
        .iter()
        .filter(|diff| diff.label() == DiffLabel::Improvement)
        .count();

    let mut out = String::new();
    out.push_str("\n---------------------------------------------------\n");
    let status_msg = if diffs.is_empty() {
        "✅ No differences".green().bold()
    } else if regressions > 0 {
        format!(
            "📈 {} regressions, {} improvements, {} total",
            regressions,
            improvements,
            diffs.len()
        )
        .red()
        .bold()
    } else {
        format!("📉 {} improvements, {} total", improvements, diffs.len())
            .green()
            .bold()
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

fn get_label_symbol(label: DiffLabel) -> &'static str {
    match label {
        DiffLabel::Regression => "📈",
        DiffLabel::Improvement => "📉",
        DiffLabel::Neutral => "➡️",
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

fn format_percent(base: f64, compare: f64) -> String {
    if base == 0.0 {
        "new".to_string()
    } else {
        format!("{:+.2}%", (compare - base) / base * 100.0)
    }
}
