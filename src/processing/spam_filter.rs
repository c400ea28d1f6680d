//! Spam (exclusion list) filtering.

use crate::models::AddressSet;

/// Result of splitting the raw set against the exclusion set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Addresses not on the exclusion list, in raw-set order.
    pub kept: Vec<String>,
    pub removed: Vec<String>,
}

/// Partition `raw` into kept and removed addresses.
///
/// An address is removed iff it is an exact member of `spam`.
pub fn filter_spam(raw: &AddressSet, spam: &AddressSet) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    for ip in raw.iter() {
        if spam.contains(ip) {
            log::trace!("filter_spam() removed {ip}");
            outcome.removed.push(ip.clone());
        } else {
            outcome.kept.push(ip.clone());
        }
    }
    log::debug!(
        "filter_spam() kept={} removed={} (spam list size {})",
        outcome.kept.len(),
        outcome.removed.len(),
        spam.len()
    );
    outcome
}
