//! Output column and processing statistics.

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

/// One output destination with its shuffled addresses.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// 1-based ordinal.
    pub id: usize,
    pub ips: Vec<String>,
    pub total_ips: usize,
}

impl Column {
    pub fn new(id: usize, ips: Vec<String>) -> Column {
        let total_ips = ips.len();
        Column { id, ips, total_ips }
    }

    /// Newline-joined address list, ready to paste elsewhere.
    pub fn export_text(&self) -> String {
        self.ips.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}

/// Aggregate counters for one run.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Distinct addresses extracted from the raw text, before spam removal.
    pub total_input: usize,
    /// Addresses that survived spam removal.
    pub valid_unique: usize,
    pub spam_removed: usize,
    /// Distinct 3-octet prefixes among the surviving addresses.
    pub total_groups: usize,
}

impl ProcessingStats {
    /// Share of extracted addresses that were kept, in `[0, 1]`.
    pub fn kept_ratio(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            self.valid_unique as f64 / self.total_input as f64
        }
    }
}

/// Columns plus stats returned by [`crate::process_ips`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShuffleResult {
    pub columns: Vec<Column>,
    pub stats: ProcessingStats,
}

impl ShuffleResult {
    /// Largest column size minus smallest column size.
    pub fn imbalance(&self) -> usize {
        match self.columns.iter().map(|c| c.total_ips).minmax() {
            MinMaxResult::NoElements | MinMaxResult::OneElement(_) => 0,
            MinMaxResult::MinMax(min, max) => max - min,
        }
    }

    /// Every placed address, column by column.
    pub fn all_ips(&self) -> impl Iterator<Item = &String> {
        self.columns.iter().flat_map(|c| c.ips.iter())
    }
}
