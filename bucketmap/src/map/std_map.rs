use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Map;

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Val = V;

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashTable;

    fn exercise<M: Map<Key = String, Val = i32>>(map: &mut M) -> Vec<Option<i32>> {
        map.put("apple".to_string(), 1);
        map.put("banana".to_string(), 2);
        map.put("orange".to_string(), 3);
        let overwritten = map.put("banana".to_string(), 4);
        let removed = map.remove(&"apple".to_string());
        let missing = map.remove(&"kiwi".to_string());
        vec![
            overwritten,
            removed,
            missing,
            map.get(&"banana".to_string()).copied(),
            Some(map.len() as i32),
        ]
    }

    #[test]
    fn agrees_with_hash_table() {
        let mut std_map = HashMap::new();
        let mut table = HashTable::new();
        let expected = vec![Some(2), Some(1), None, Some(4), Some(2)];
        assert_eq!(exercise(&mut std_map), expected);
        assert_eq!(exercise(&mut table), expected);
        assert!(!Map::is_empty(&std_map));
    }
}
