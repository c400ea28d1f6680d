//! Clean, group and shuffle IPv4 address lists into balanced columns.
//!
//! The pipeline extracts dotted-quad tokens from free text, drops those on an
//! exclusion ("spam") list, groups the rest by 3-octet prefix, mixes the
//! groups across address classes and deals the addresses into columns whose
//! sizes differ by at most one.

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::{ProcessingStats, ShuffleResult};
use processing::{
    bucket_by_class, distribute, extract_ips, filter_spam, group_by_prefix, interleave,
};
use rand::Rng;

/// Run the whole pipeline with the thread-local generator.
///
/// # Arguments
/// * `raw_input` - Free text containing candidate addresses
/// * `spam_input` - Free text containing addresses to exclude
/// * `column_count` - Number of output columns
///
/// # Examples
/// ```
/// let result = ip_repo_shuffle::process_ips("10.0.0.1 10.0.0.2 8.8.8.8", "8.8.8.8", 2);
/// assert_eq!(result.stats.valid_unique, 2);
/// assert_eq!(result.columns.len(), 2);
/// ```
pub fn process_ips(raw_input: &str, spam_input: &str, column_count: usize) -> ShuffleResult {
    process_ips_with_rng(raw_input, spam_input, column_count, &mut rand::thread_rng())
}

/// Run the whole pipeline drawing every shuffle from `rng`.
pub fn process_ips_with_rng<R: Rng + ?Sized>(
    raw_input: &str,
    spam_input: &str,
    column_count: usize,
    rng: &mut R,
) -> ShuffleResult {
    let raw_set = extract_ips(raw_input);
    let spam_set = extract_ips(spam_input);
    let outcome = filter_spam(&raw_set, &spam_set);

    let groups = group_by_prefix(&outcome.kept);
    let stats = ProcessingStats {
        total_input: raw_set.len(),
        valid_unique: outcome.kept.len(),
        spam_removed: outcome.removed.len(),
        total_groups: groups.len(),
    };

    let interleaved = interleave(bucket_by_class(groups), rng);
    let columns = distribute(interleaved, column_count, rng);

    log::info!(
        "process_ips() input={} valid={} removed={} groups={} columns={}",
        stats.total_input,
        stats.valid_unique,
        stats.spam_removed,
        stats.total_groups,
        columns.len()
    );
    ShuffleResult { columns, stats }
}
