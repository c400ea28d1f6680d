//! Address processing stages.
//!
//! Data flows left to right through these stages:
//! - [`extract`] - dotted-quad tokens out of free text
//! - [`spam_filter`] - drop addresses on the exclusion list
//! - [`grouper`] - 3-octet prefix groups, bucketed by address class
//! - [`interleave`] - mix the class buckets into one sequence
//! - [`distribute`] - deal addresses into balanced, shuffled columns

mod distribute;
mod extract;
mod grouper;
mod interleave;
mod spam_filter;

// Re-export public functions
pub use distribute::distribute;
pub use extract::extract_ips;
pub use grouper::{bucket_by_class, group_by_prefix, ClassBuckets};
pub use interleave::interleave;
pub use spam_filter::{filter_spam, FilterOutcome};
