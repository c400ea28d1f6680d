//! Deduplicated address collection.

use std::collections::HashSet;

/// Distinct addresses in first-seen order.
///
/// Membership is exact string equality. Order only matters for reproducible
/// seeded runs; every consumer shuffles downstream.
#[derive(Debug, Default, Clone)]
pub struct AddressSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl AddressSet {
    pub fn new() -> AddressSet {
        AddressSet::default()
    }

    /// Insert an address, returning `false` when it was already present.
    pub fn insert(&mut self, ip: &str) -> bool {
        if self.seen.contains(ip) {
            return false;
        }
        self.seen.insert(ip.to_string());
        self.order.push(ip.to_string());
        true
    }

    pub fn contains(&self, ip: &str) -> bool {
        self.seen.contains(ip)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }
}

impl<'a> FromIterator<&'a str> for AddressSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> AddressSet {
        let mut set = AddressSet::new();
        for ip in iter {
            set.insert(ip);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_and_keeps_order() {
        let set: AddressSet = ["10.0.0.1", "1.1.1.1", "10.0.0.1"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().map(String::as_str).collect::<Vec<&str>>(),
            vec!["10.0.0.1", "1.1.1.1"]
        );
        assert!(set.contains("1.1.1.1"));
        assert!(!set.contains("1.1.1.2"));
    }

    #[test]
    fn test_no_normalization() {
        let set: AddressSet = ["010.0.0.1", "10.0.0.1"].into_iter().collect();
        assert_eq!(set.len(), 2, "Leading zeros make a different token");
    }
}
