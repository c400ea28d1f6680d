//! CSV output: the columns side by side, one row per position.

use crate::models::ShuffleResult;
use itertools::Itertools;

use super::terminal::format_field;

/// Field width fitting a quoted `255.255.255.255`.
const FIELD_WIDTH: usize = 17;

/// Render the columns as CSV.
///
/// Header is `"col_1",...,"col_n"`; shorter columns are padded with empty
/// fields so every row has one field per column.
pub fn render_csv(result: &ShuffleResult) -> String {
    log::info!(
        "#Start render_csv() {} columns, {} addresses",
        result.columns.len(),
        result.stats.valid_unique
    );
    let mut out = String::new();

    let header = result
        .columns
        .iter()
        .map(|c| format_field(format!("col_{}", c.id), FIELD_WIDTH))
        .join(",");
    out.push_str(&header);
    out.push('\n');

    let rows = result
        .columns
        .iter()
        .map(|c| c.ips.len())
        .max()
        .unwrap_or(0);
    for row in 0..rows {
        let line = result
            .columns
            .iter()
            .map(|c| format_field(c.ips.get(row).map(String::as_str).unwrap_or(""), FIELD_WIDTH))
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
