use crate::error::BuildError;
use crate::map::HashTable;

use std::hash::Hash;
use std::marker::PhantomData;

use log::debug;

/// Builds a [`HashTable`][table-struct] with a chosen number of buckets.
///
/// The bucket count is fixed once the table is built.
///
/// # Examples
///
/// ```rust
/// use bucketmap::{HashTable, HashTableBuilder};
///
/// let mut table: HashTable<String, u32> = HashTableBuilder::new()
///     .capacity(64)
///     .build()
///     .unwrap();
///
/// table.put("apple".to_string(), 1);
/// assert_eq!(table.capacity(), 64);
/// ```
///
/// [table-struct]: ./struct.HashTable.html
pub struct HashTableBuilder<K, V> {
    capacity: usize,
    table_type: PhantomData<HashTable<K, V>>,
}

impl<K, V> Default for HashTableBuilder<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTableBuilder<K, V>
where
    K: Hash + Eq,
{
    /// Construct a new `HashTableBuilder` that starts from
    /// [`HashTable::DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self {
            capacity: HashTable::<K, V>::DEFAULT_CAPACITY,
            table_type: PhantomData,
        }
    }

    /// Sets the number of buckets.
    pub fn capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Builds a `HashTable<K, V>`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ZeroCapacity`] if the capacity was set to 0.
    pub fn build(self) -> Result<HashTable<K, V>, BuildError> {
        if self.capacity == 0 {
            return Err(BuildError::ZeroCapacity);
        }
        debug!("building hash table with {} buckets", self.capacity);
        Ok(HashTable::with_buckets(self.capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        let table: HashTable<u32, u32> = HashTableBuilder::new().build().unwrap();
        assert_eq!(table.capacity(), 16);
        assert!(table.is_empty());
    }

    #[test]
    fn custom_capacity() {
        let table: HashTable<u32, u32> = HashTableBuilder::default().capacity(3).build().unwrap();
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.dump().buckets().len(), 3);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = HashTableBuilder::<u32, u32>::new().capacity(0).build();
        assert_eq!(result.err(), Some(BuildError::ZeroCapacity));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            BuildError::ZeroCapacity.to_string(),
            "a hash table needs at least one bucket, but the capacity was set to 0"
        );
    }
}
