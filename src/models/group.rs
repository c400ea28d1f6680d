//! Prefix group model.

use super::address::{classify, AddressClass};
use serde::Serialize;

/// Addresses sharing the same first three octets.
///
/// Built only by the grouper, which never creates an empty group.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup {
    /// The 3-octet prefix, e.g. "192.168.1".
    pub key: String,
    /// Member addresses in first-seen order.
    pub ips: Vec<String>,
}

impl PrefixGroup {
    /// Create a group holding its first member.
    pub fn new(key: String, first_ip: String) -> PrefixGroup {
        PrefixGroup {
            key,
            ips: vec![first_ip],
        }
    }

    /// Class of the group, taken from its first member.
    ///
    /// All members share the first octet because it is part of the key.
    pub fn class(&self) -> AddressClass {
        self.ips
            .first()
            .map(|ip| classify(ip))
            .unwrap_or(AddressClass::Other)
    }

    pub fn len(&self) -> usize {
        self.ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}
