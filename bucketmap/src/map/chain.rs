//! Singly linked chains of entries, one per bucket.

use std::borrow::Borrow;
use std::mem;

type Link<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value node. A `None` key is the designated null key.
pub(crate) struct Entry<K, V> {
    key: Option<K>,
    value: V,
    next: Link<K, V>,
}

impl<K, V> Entry<K, V> {
    fn new_tail(key: Option<K>, value: V) -> Box<Self> {
        Box::new(Entry {
            key,
            value,
            next: None,
        })
    }

    pub(crate) fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    fn matches<Q>(&self, key: Option<&Q>) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match (self.key.as_ref(), key) {
            (None, None) => true,
            (Some(stored), Some(key)) => Q::eq(stored.borrow(), key),
            _ => false,
        }
    }
}

/// What `Chain::upsert` did with the pair it was handed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Upsert<V> {
    /// Appended at the tail; `chain_len` counts the new entry.
    Inserted { chain_len: usize },
    /// Overwrote an existing entry in place, yielding the old value.
    Updated(V),
}

/// The chain hanging off one bucket slot. The slot owns the head and each
/// entry owns its successor.
pub(crate) struct Chain<K, V> {
    head: Link<K, V>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Chain { head: None }
    }
}

impl<K, V> Chain<K, V> {
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn find<Q>(&self, key: Option<&Q>) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = self.head.as_deref();
        while let Some(entry) = link {
            if entry.matches(key) {
                return Some(entry);
            }
            link = entry.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut<Q>(&mut self, key: Option<&Q>) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = self.head.as_deref_mut();
        while let Some(entry) = link {
            if entry.matches(key) {
                return Some(entry);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Overwrites the value of a matching entry without moving it, or appends
    /// a new entry at the tail.
    pub(crate) fn upsert(&mut self, key: Option<K>, value: V) -> Upsert<V>
    where
        K: Eq,
    {
        let mut cursor = &mut self.head;
        let mut depth = 0;
        while let Some(entry) = cursor {
            if entry.key == key {
                return Upsert::Updated(mem::replace(&mut entry.value, value));
            }
            cursor = &mut entry.next;
            depth += 1;
        }
        *cursor = Some(Entry::new_tail(key, value));
        Upsert::Inserted {
            chain_len: depth + 1,
        }
    }

    /// Unlinks the matching entry, pointing its predecessor (or the head) at
    /// its successor.
    pub(crate) fn unlink<Q>(&mut self, key: Option<&Q>) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .map_or(false, |entry| !entry.matches(key))
        {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        Some(removed.value)
    }
}

impl<K, V> Drop for Chain<K, V> {
    // Unrolled so a chain of any length drops without recursing per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut entry) = link {
            link = entry.next.take();
        }
    }
}

/// Head-to-tail traversal of a chain.
pub(crate) struct Iter<'a, K, V> {
    next: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (Option<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some((entry.key(), entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(keys: &[&'static str]) -> Chain<&'static str, usize> {
        let mut chain = Chain::default();
        for (i, key) in keys.iter().enumerate() {
            chain.upsert(Some(*key), i);
        }
        chain
    }

    fn keys(chain: &Chain<&'static str, usize>) -> Vec<Option<&'static str>> {
        chain.iter().map(|(k, _)| k.copied()).collect()
    }

    #[test]
    fn upsert_appends_at_tail() {
        let mut chain = chain_of(&["a", "b"]);
        assert_eq!(
            chain.upsert(Some("c"), 2),
            Upsert::Inserted { chain_len: 3 }
        );
        assert_eq!(keys(&chain), vec![Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn upsert_updates_in_place() {
        let mut chain = chain_of(&["a", "b", "c"]);
        assert_eq!(chain.upsert(Some("b"), 10), Upsert::Updated(1));
        assert_eq!(keys(&chain), vec![Some("a"), Some("b"), Some("c")]);
        assert_eq!(chain.find(Some("b")).map(Entry::value), Some(&10));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn unlink_head_middle_tail() {
        let mut chain = chain_of(&["a", "b", "c", "d"]);
        assert_eq!(chain.unlink(Some("b")), Some(1));
        assert_eq!(keys(&chain), vec![Some("a"), Some("c"), Some("d")]);
        assert_eq!(chain.unlink(Some("a")), Some(0));
        assert_eq!(keys(&chain), vec![Some("c"), Some("d")]);
        assert_eq!(chain.unlink(Some("d")), Some(3));
        assert_eq!(keys(&chain), vec![Some("c")]);
        assert_eq!(chain.unlink(Some("c")), Some(2));
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn unlink_missing_key_is_noop() {
        let mut chain = chain_of(&["a", "b"]);
        assert_eq!(chain.unlink(Some("z")), None);
        assert_eq!(chain.unlink::<str>(None), None);
        assert_eq!(chain.len(), 2);

        let mut empty: Chain<&str, usize> = Chain::default();
        assert_eq!(empty.unlink(Some("a")), None);
    }

    #[test]
    fn null_key_only_matches_null_key() {
        let mut chain = chain_of(&["a"]);
        chain.upsert(None, 7);
        assert_eq!(chain.find::<str>(None).map(Entry::value), Some(&7));
        assert!(chain.find(Some("b")).is_none());
        assert_eq!(chain.upsert(None, 8), Upsert::Updated(7));
        assert_eq!(keys(&chain), vec![Some("a"), None]);
    }

    #[test]
    fn find_mut_edits_value() {
        let mut chain = chain_of(&["a", "b"]);
        if let Some(entry) = chain.find_mut(Some("b")) {
            *entry.value_mut() += 40;
        }
        assert_eq!(chain.find(Some("b")).map(Entry::value), Some(&41));
    }

    #[test]
    fn long_chain_drops() {
        let mut chain = Chain::default();
        for i in 0..200_000u32 {
            chain.push_front(i);
        }
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }

    impl Chain<u32, ()> {
        // `upsert` scans the whole chain, which is quadratic here.
        fn push_front(&mut self, key: u32) {
            let next = self.head.take();
            self.head = Some(Box::new(Entry {
                key: Some(key),
                value: (),
                next,
            }));
        }
    }
}
