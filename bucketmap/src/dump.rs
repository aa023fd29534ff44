//! Structured bucket listings for inspecting a table.
//!
//! A [`Dump`] is a snapshot of every bucket in index order. Its `Display`
//! rendering prints one line per bucket, for example:
//!
//! ```text
//! [0]: null
//! [1]: banana, 4-> null
//! [2]: orange, 3-> pear, 5-> null
//! ```
//!
//! A null key renders as `null`, and the trailing `null` marks the end of the
//! chain.

use std::fmt;
use std::slice;
use std::vec;

/// The entries of one bucket, head to tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketListing<'a, K, V> {
    index: usize,
    entries: Vec<(Option<&'a K>, &'a V)>,
}

impl<'a, K, V> BucketListing<'a, K, V> {
    pub(crate) fn new(index: usize, entries: Vec<(Option<&'a K>, &'a V)>) -> Self {
        Self { index, entries }
    }

    /// Position of this bucket in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Key-value pairs in chain order. A `None` key is the null key.
    pub fn entries(&self) -> &[(Option<&'a K>, &'a V)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> fmt::Display for BucketListing<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: ", self.index)?;
        for (key, value) in &self.entries {
            match key {
                Some(key) => write!(f, "{}, {}-> ", key, value)?,
                None => write!(f, "null, {}-> ", value)?,
            }
        }
        f.write_str("null")
    }
}

/// Every bucket of a table, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dump<'a, K, V> {
    buckets: Vec<BucketListing<'a, K, V>>,
}

impl<'a, K, V> Dump<'a, K, V> {
    pub(crate) fn new(buckets: Vec<BucketListing<'a, K, V>>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[BucketListing<'a, K, V>] {
        &self.buckets
    }

    pub fn iter(&self) -> slice::Iter<'_, BucketListing<'a, K, V>> {
        self.buckets.iter()
    }

    /// Total number of entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(BucketListing::len).sum()
    }
}

impl<'a, K, V> IntoIterator for Dump<'a, K, V> {
    type Item = BucketListing<'a, K, V>;
    type IntoIter = vec::IntoIter<BucketListing<'a, K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'d, 'a, K, V> IntoIterator for &'d Dump<'a, K, V> {
    type Item = &'d BucketListing<'a, K, V>;
    type IntoIter = slice::Iter<'d, BucketListing<'a, K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl<K, V> fmt::Display for Dump<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.buckets {
            writeln!(f, "{}", bucket)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_empty_bucket() {
        let listing: BucketListing<'_, &str, u32> = BucketListing::new(3, vec![]);
        assert_eq!(listing.to_string(), "[3]: null");
        assert!(listing.is_empty());
    }

    #[test]
    fn renders_chain_in_order() {
        let (orange, pear) = ("orange", "pear");
        let listing = BucketListing::new(2, vec![(Some(&orange), &3), (Some(&pear), &5)]);
        assert_eq!(listing.to_string(), "[2]: orange, 3-> pear, 5-> null");
    }

    #[test]
    fn renders_null_key() {
        let listing: BucketListing<'_, &str, u32> = BucketListing::new(0, vec![(None, &9)]);
        assert_eq!(listing.to_string(), "[0]: null, 9-> null");
    }

    #[test]
    fn renders_one_line_per_bucket() {
        let banana = "banana";
        let dump = Dump::new(vec![
            BucketListing::new(0, vec![]),
            BucketListing::new(1, vec![(Some(&banana), &4)]),
        ]);
        assert_eq!(dump.to_string(), "[0]: null\n[1]: banana, 4-> null\n");
        assert_eq!(dump.entry_count(), 1);
        assert_eq!(dump.iter().map(BucketListing::index).collect::<Vec<_>>(), vec![0, 1]);
    }
}
