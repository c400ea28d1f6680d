//! Terminal output.
//!
//! Renders the stats banner and the columns with colors for a terminal.

use crate::models::{Column, ProcessingStats, ShuffleResult};
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One-line summary of the run counters.
pub fn format_stats(stats: &ProcessingStats) -> String {
    format!(
        "Input: {input} | Valid: {valid} | Groups: {groups} | Removed: {removed} | Cleaned total: {valid} ({ratio:.1}%)",
        input = stats.total_input,
        valid = stats.valid_unique.to_string().green(),
        groups = stats.total_groups.to_string().purple(),
        removed = stats.spam_removed.to_string().red(),
        ratio = stats.kept_ratio() * 100.0,
    )
}

/// Render one column: a `Col <id> (<size>)` header then its addresses.
pub fn format_column(column: &Column) -> String {
    let mut out = String::new();
    let header = format!("Col {} ({})", column.id, column.total_ips);
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", header.bold());
    if column.is_empty() {
        let _ = writeln!(out, "  {}", "Empty".italic().dimmed());
    } else {
        for ip in &column.ips {
            let _ = writeln!(out, "  {ip}");
        }
    }
    out
}

/// Render the whole result for a terminal.
///
/// The banner is skipped when `quiet` is set.
pub fn render_terminal(result: &ShuffleResult, quiet: bool) -> String {
    let mut out = String::new();
    if !quiet {
        let _ = writeln!(out, "{}", "IP REPO SHUFFLE".bold().on_blue());
        let _ = writeln!(out, "{}", format_stats(&result.stats));
        if result.stats.valid_unique == 0 {
            let _ = writeln!(
                out,
                "{}: paste addresses to clean them, interleave classes and shuffle them into balanced columns.",
                "Ready to shuffle".yellow()
            );
        }
        out.push('\n');
    }
    for column in &result.columns {
        out.push_str(&format_column(column));
    }
    out
}
