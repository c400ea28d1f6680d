//! Dotted-quad extraction from free text.

use crate::models::AddressSet;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for dotted-quad tokens: four 1-3 digit groups, no range checks.
/// Word boundaries are ASCII-only, so a non-ASCII letter next to a token
/// does not hide it.
static IP_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ip_regex() -> &'static Regex {
    IP_REGEX.get_or_init(|| {
        Regex::new(r"(?-u:\b)(?:[0-9]{1,3}\.){3}[0-9]{1,3}(?-u:\b)").expect("Invalid Regex")
    })
}

/// Extract the distinct dotted-quad tokens found in `text`.
///
/// Word boundaries stop matches inside longer digit runs, so `1234.1.1.1`
/// yields nothing while `1.2.3.4.5` yields `1.2.3.4`.
///
/// # Examples
/// ```
/// use ip_repo_shuffle::processing::extract_ips;
/// let set = extract_ips("a 10.0.0.1, b 10.0.0.1; c 999.1.1.1");
/// assert_eq!(set.len(), 2);
/// ```
pub fn extract_ips(text: &str) -> AddressSet {
    let set: AddressSet = get_ip_regex().find_iter(text).map(|m| m.as_str()).collect();
    log::trace!("extract_ips() found {} distinct tokens", set.len());
    set
}
