use super::chain::{Chain, Entry, Upsert};
use super::Map;
use crate::builder::HashTableBuilder;
use crate::dump::{BucketListing, Dump};

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace};

/// Bucket that always holds the null key.
pub const NULL_KEY_BUCKET: usize = 0;

/// Chains longer than this are logged once as they grow past it.
pub const LONG_CHAIN_THRESHOLD: usize = 8;

/// A hash table with a fixed number of buckets, resolving collisions by
/// chaining entries in a singly linked list per bucket.
///
/// The bucket array never grows. When many keys land in the same bucket its
/// chain keeps growing and lookups in that bucket degrade towards a linear
/// scan; nothing fails.
///
/// Besides ordinary keys, the table holds at most one entry for the null
/// key, accessed through the `*_null_key` methods. It always lives in
/// bucket [`NULL_KEY_BUCKET`].
///
/// # Examples
///
/// ```rust
/// use bucketmap::HashTable;
///
/// let mut table = HashTable::new();
/// table.put("apple".to_string(), 1);
/// table.put("banana".to_string(), 2);
/// table.put("banana".to_string(), 4);
///
/// assert_eq!(table.get("banana"), Some(&4));
/// assert_eq!(table.len(), 2);
///
/// table.remove("apple");
/// assert_eq!(table.get("apple"), None);
/// ```
pub struct HashTable<K, V> {
    buckets: Vec<Chain<K, V>>,
    len: usize,
}

impl<K, V> Default for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Number of buckets used by [`HashTable::new`].
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new() -> Self {
        Self::with_buckets(Self::DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`HashTable::builder`] to get an error
    /// instead.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self::with_buckets(capacity)
    }

    pub fn builder() -> HashTableBuilder<K, V> {
        HashTableBuilder::new()
    }

    pub(crate) fn with_buckets(num_buckets: usize) -> Self {
        let buckets = (0..num_buckets).map(|_| Chain::default()).collect();
        HashTable { buckets, len: 0 }
    }

    /// Number of buckets. Fixed for the lifetime of the table.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of key-value pairs currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket. Not acted upon; the bucket count never changes.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Length of the longest chain in the table.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// Index of the bucket `key` belongs to.
    ///
    /// Hashing uses an unkeyed SipHash, so the index of a key is the same in
    /// every table of the same capacity and across runs.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.index_for(Some(key))
    }

    fn index_for<Q>(&self, key: Option<&Q>) -> usize
    where
        Q: Hash + ?Sized,
    {
        match key {
            None => NULL_KEY_BUCKET,
            Some(key) => {
                let mut hasher = DefaultHasher::new();
                key.hash(&mut hasher);
                (hasher.finish() % self.buckets.len() as u64) as usize
            }
        }
    }

    /// Associates `value` with `key`.
    ///
    /// If the key is already present its value is overwritten in place and
    /// the old value is returned; the entry keeps its position in the chain.
    /// Otherwise the pair is appended to the tail of its bucket's chain.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.upsert(Some(key), value)
    }

    /// Associates `value` with the null key.
    pub fn put_null_key(&mut self, value: V) -> Option<V> {
        self.upsert(None, value)
    }

    fn upsert(&mut self, key: Option<K>, value: V) -> Option<V> {
        let index = self.index_for(key.as_ref());
        match self.buckets[index].upsert(key, value) {
            Upsert::Updated(old) => {
                trace!("updated entry in bucket {}", index);
                Some(old)
            }
            Upsert::Inserted { chain_len } => {
                self.len += 1;
                trace!(
                    "inserted entry into bucket {} (chain length {})",
                    index,
                    chain_len
                );
                if chain_len == LONG_CHAIN_THRESHOLD + 1 {
                    debug!(
                        "bucket {} chain grew past {} entries ({} entries in {} buckets)",
                        index,
                        LONG_CHAIN_THRESHOLD,
                        self.len,
                        self.capacity()
                    );
                }
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    ///
    /// When `V` is itself optional, [`HashTable::contains_key`] tells a
    /// missing key apart from a stored `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(Some(key)).map(Entry::value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup_mut(Some(key)).map(Entry::value_mut)
    }

    pub fn get_null_key(&self) -> Option<&V> {
        self.lookup::<K>(None).map(Entry::value)
    }

    pub fn get_null_key_mut(&mut self) -> Option<&mut V> {
        self.lookup_mut::<K>(None).map(Entry::value_mut)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(Some(key)).is_some()
    }

    pub fn contains_null_key(&self) -> bool {
        self.lookup::<K>(None).is_some()
    }

    fn lookup<Q>(&self, key: Option<&Q>) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);
        self.buckets[index].find(key)
    }

    fn lookup_mut<Q>(&mut self, key: Option<&Q>) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);
        self.buckets[index].find_mut(key)
    }

    /// Removes `key` from the table, returning its value. Removing a key
    /// that is not present does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.unlink(Some(key))
    }

    pub fn remove_null_key(&mut self) -> Option<V> {
        self.unlink::<K>(None)
    }

    fn unlink<Q>(&mut self, key: Option<&Q>) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_for(key);
        let removed = self.buckets[index].unlink(key)?;
        self.len -= 1;
        trace!("unlinked entry from bucket {}", index);
        Some(removed)
    }

    /// Lists every bucket in index order with its chain from head to tail.
    pub fn dump(&self) -> Dump<'_, K, V> {
        Dump::new(
            self.buckets
                .iter()
                .enumerate()
                .map(|(index, chain)| BucketListing::new(index, chain.iter().collect()))
                .collect(),
        )
    }
}

impl<K, V> fmt::Debug for HashTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flat_map(Chain::iter))
            .finish()
    }
}

impl<K, V> Map for HashTable<K, V>
where
    K: Hash + Eq,
{
    type Key = K;
    type Val = V;

    fn get(&self, key: &K) -> Option<&V> {
        HashTable::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        HashTable::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashTable::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }
}
