//! Per-column text export.
//!
//! Writes each non-empty column as a newline-joined address list, one file
//! per column, so a column can be pasted elsewhere.

use crate::models::Column;
use std::error::Error;
use std::path::{Path, PathBuf};

/// File name for a column export, e.g. `ip_columns_2024-05-01_col3.txt`.
pub fn column_file_name(date_tag: &str, id: usize) -> String {
    format!("ip_columns_{date_tag}_col{id}.txt")
}

/// Write every non-empty column into `dir`, tagging names with today's date.
pub fn export_columns(dir: &Path, columns: &[Column]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    export_columns_tagged(dir, columns, &today)
}

/// Write every non-empty column into `dir` using `date_tag` in the file names.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - The files written, in column order
/// * `Err` - If the directory or a file cannot be written
pub fn export_columns_tagged(
    dir: &Path,
    columns: &[Column],
    date_tag: &str,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Error creating export directory {}: {e}", dir.display()))?;

    let mut written = Vec::new();
    for column in columns.iter().filter(|c| !c.is_empty()) {
        let path = dir.join(column_file_name(date_tag, column.id));
        let mut text = column.export_text();
        text.push('\n');
        std::fs::write(&path, text)
            .map_err(|e| format!("Error writing column file {}: {e}", path.display()))?;
        log::info!(
            "Wrote column {} ({} ips) to {}",
            column.id,
            column.total_ips,
            path.display()
        );
        written.push(path);
    }

    if written.is_empty() {
        log::warn!("No non-empty columns to export to {}", dir.display());
    }
    Ok(written)
}
