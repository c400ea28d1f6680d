//! IPv4 address tokens, prefix keys and legacy address classes.
//!
//! Addresses stay as the raw text extracted from the input. Nothing here
//! range-checks octets: "999.1.1.1" is a valid token that simply lands in
//! [`AddressClass::Other`].

use serde::Serialize;
use std::fmt;

/// Number of leading octets that form a prefix group key.
pub const PREFIX_OCTETS: usize = 3;

/// Legacy (classful) network class of an address, decided by its first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressClass {
    A,
    B,
    C,
    Other,
}

impl AddressClass {
    /// Bucket order used when interleaving groups.
    pub const ALL: [AddressClass; 4] = [
        AddressClass::A,
        AddressClass::B,
        AddressClass::C,
        AddressClass::Other,
    ];

    /// Classify a first octet value.
    ///
    /// # Examples
    /// ```
    /// use ip_repo_shuffle::models::AddressClass;
    /// assert_eq!(AddressClass::from_octet(127), AddressClass::A);
    /// assert_eq!(AddressClass::from_octet(224), AddressClass::Other);
    /// ```
    pub fn from_octet(octet: u32) -> AddressClass {
        match octet {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            _ => AddressClass::Other,
        }
    }

    /// Position of this class in [`AddressClass::ALL`].
    pub fn index(self) -> usize {
        match self {
            AddressClass::A => 0,
            AddressClass::B => 1,
            AddressClass::C => 2,
            AddressClass::Other => 3,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// Classify an address token by its first dot-separated octet.
///
/// An empty or non-numeric first octet falls back to [`AddressClass::Other`].
pub fn classify(ip: &str) -> AddressClass {
    let first = ip.split('.').next().unwrap_or("");
    match first.parse::<u32>() {
        Ok(octet) => AddressClass::from_octet(octet),
        Err(_) => AddressClass::Other,
    }
}

/// Prefix group key: the first three octets as raw text, e.g.
/// `192.168.1.50` -> `192.168.1`.
pub fn group_key(ip: &str) -> String {
    ip.split('.')
        .take(PREFIX_OCTETS)
        .collect::<Vec<&str>>()
        .join(".")
}
