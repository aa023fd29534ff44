//! This module contains the chained hash table and the map trait it shares
//! with the standard library's `HashMap`.

mod chain;
mod hash_table;
mod std_map;

pub use hash_table::{HashTable, LONG_CHAIN_THRESHOLD, NULL_KEY_BUCKET};

use std::hash::Hash;

/// Common functionalities for hash maps.
pub trait Map {
    /// Key type for a HashMap implementation.
    type Key: Hash + Eq;
    /// Value type for a HashMap implementation.
    type Val;

    /// Get reference to a value associated with a key, if it exists.
    fn get(&self, key: &Self::Key) -> Option<&Self::Val>;

    /// Check whether the map contains a value mapped to the given key.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Emplaces a key-value pair into the map.
    ///
    /// If there were a key-value pair associated with this provided key,
    /// it will be overwritten and the previous value returned.
    fn put(&mut self, key: Self::Key, value: Self::Val) -> Option<Self::Val>;

    /// Attempts to remove a key-value pair based on the provided key, returning
    /// the value if a key-value pair was found and removed.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Val>;

    /// Number of key-value pairs in the map.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
