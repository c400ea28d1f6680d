//! Output formatting for shuffled columns.
//!
//! This module handles rendering and exporting a [`crate::models::ShuffleResult`]:
//! - [`csv`] - columns side by side as CSV
//! - [`json`] - the full result as JSON
//! - [`terminal`] - stats banner and columns with colors
//! - [`export`] - one text file per column

mod csv;
mod export;
mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::models::ShuffleResult;
use std::error::Error;

pub use csv::render_csv;
pub use export::{column_file_name, export_columns, export_columns_tagged};
pub use json::render_json;
pub use terminal::{format_column, format_field, format_stats, render_terminal};

/// Render `result` in the requested format.
pub fn render(
    result: &ShuffleResult,
    format: OutputFormat,
    quiet: bool,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Terminal => Ok(render_terminal(result, quiet)),
        OutputFormat::Csv => Ok(render_csv(result)),
        OutputFormat::Json => render_json(result),
    }
}
