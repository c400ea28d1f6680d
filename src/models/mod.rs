//! Domain models for the address shuffler.
//!
//! This module contains the data structures passed between stages:
//! - [`AddressSet`] - deduplicated extracted addresses
//! - [`AddressClass`] - legacy class of an address, plus prefix key helpers
//! - [`PrefixGroup`] - addresses sharing a 3-octet prefix
//! - [`Column`], [`ProcessingStats`] and [`ShuffleResult`] - the output

mod address;
mod address_set;
mod column;
mod group;

// Re-export public types
pub use address::{classify, group_key, AddressClass, PREFIX_OCTETS};
pub use address_set::AddressSet;
pub use column::{Column, ProcessingStats, ShuffleResult};
pub use group::PrefixGroup;
