//! Prefix grouping and class bucketing.
//!
//! Groups surviving addresses by their first three octets, then sorts the
//! groups into A/B/C/Other buckets by the class of each group's first member.

use crate::models::{group_key, AddressClass, PrefixGroup};
use std::collections::HashMap;

/// Group addresses by 3-octet prefix.
///
/// Groups come out in order of each key's first appearance and keep their
/// members in input order.
pub fn group_by_prefix(ips: &[String]) -> Vec<PrefixGroup> {
    let mut groups: Vec<PrefixGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for ip in ips {
        let key = group_key(ip);
        match index_by_key.get(&key).copied() {
            Some(i) => groups[i].ips.push(ip.clone()),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(PrefixGroup::new(key, ip.clone()));
            }
        }
    }

    log::debug!(
        "group_by_prefix() {} addresses -> {} groups",
        ips.len(),
        groups.len()
    );
    groups
}

/// Prefix groups split by address class.
#[derive(Debug, Default, Clone)]
pub struct ClassBuckets {
    buckets: [Vec<PrefixGroup>; 4],
}

impl ClassBuckets {
    pub fn new() -> ClassBuckets {
        ClassBuckets::default()
    }

    pub fn push(&mut self, group: PrefixGroup) {
        let class = group.class();
        self.buckets[class.index()].push(group);
    }

    pub fn get(&self, class: AddressClass) -> &[PrefixGroup] {
        &self.buckets[class.index()]
    }

    pub fn get_mut(&mut self, class: AddressClass) -> &mut Vec<PrefixGroup> {
        &mut self.buckets[class.index()]
    }

    /// Length of the largest bucket.
    pub fn max_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The four buckets in [`AddressClass::ALL`] order.
    pub fn into_inner(self) -> [Vec<PrefixGroup>; 4] {
        self.buckets
    }

    /// Total number of groups over all buckets.
    pub fn group_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Sort groups into class buckets, preserving their relative order.
pub fn bucket_by_class(groups: Vec<PrefixGroup>) -> ClassBuckets {
    let mut buckets = ClassBuckets::new();
    for group in groups {
        buckets.push(group);
    }
    log::debug!(
        "bucket_by_class() A={} B={} C={} Other={}",
        buckets.get(AddressClass::A).len(),
        buckets.get(AddressClass::B).len(),
        buckets.get(AddressClass::C).len(),
        buckets.get(AddressClass::Other).len()
    );
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ips(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_by_prefix() {
        let groups = group_by_prefix(&ips(&[
            "192.168.1.10",
            "10.0.0.1",
            "192.168.1.11",
            "192.168.2.1",
        ]));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, "192.168.1");
        assert_eq!(groups[0].ips, ips(&["192.168.1.10", "192.168.1.11"]));
        assert_eq!(groups[1].key, "10.0.0");
        assert_eq!(groups[2].key, "192.168.2");
    }

    #[test]
    fn test_group_by_prefix_is_textual() {
        // Same numeric prefix, different text.
        let groups = group_by_prefix(&ips(&["10.0.0.1", "010.0.0.2"]));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_by_prefix_empty() {
        assert!(group_by_prefix(&[]).is_empty());
    }

    #[test]
    fn test_bucket_by_class() {
        let groups = group_by_prefix(&ips(&[
            "10.0.0.1",
            "11.0.0.1",
            "172.16.0.1",
            "192.168.1.1",
            "224.0.0.1",
            "999.0.0.1",
        ]));
        let buckets = bucket_by_class(groups);
        assert_eq!(buckets.get(AddressClass::A).len(), 2);
        assert_eq!(buckets.get(AddressClass::B).len(), 1);
        assert_eq!(buckets.get(AddressClass::C).len(), 1);
        assert_eq!(buckets.get(AddressClass::Other).len(), 2);
        assert_eq!(buckets.max_len(), 2);
        assert_eq!(buckets.group_count(), 6);
        assert_eq!(buckets.get(AddressClass::A)[1].key, "11.0.0");
    }
}
