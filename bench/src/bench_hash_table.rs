use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use bucketmap::{HashTable, Map};
use dashmap::DashMap;
use log::info;
use rand::{distributions::Alphanumeric, Rng};

const NUM_PAIRS: usize = 20_000;
const WIDE_NUM_BUCKETS: usize = 4_096;

macro_rules! bench {
    ($name: expr, $body: expr) => {
        let now = Instant::now();
        $body;
        let elapsed = now.elapsed();
        println!("{} elapsed: {:.2?}", $name, elapsed);
    };
}

fn make_random_string() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect()
}

fn make_random_string_pairs(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|_| (make_random_string(), make_random_string()))
        .collect()
}

fn fill_and_probe<M>(map: &mut M, src: &[(M::Key, M::Val)])
where
    M: Map,
    M::Key: Clone,
    M::Val: Clone,
{
    for (key, val) in src {
        map.put(key.clone(), val.clone());
    }
    for (key, _) in src {
        assert!(map.contains(key));
    }
}

fn bench_map<K, V>(src: &[(K, V)])
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    bench!("HashTable (default buckets)", {
        let mut table: HashTable<K, V> = HashTable::new();
        fill_and_probe(&mut table, src);
        info!("longest chain: {}", table.longest_chain());
    });

    bench!(format!("HashTable ({} buckets)", WIDE_NUM_BUCKETS), {
        let mut table: HashTable<K, V> = HashTable::with_capacity(WIDE_NUM_BUCKETS);
        fill_and_probe(&mut table, src);
        info!("longest chain: {}", table.longest_chain());
    });

    bench!("std HashMap", {
        let mut map: HashMap<K, V> = HashMap::new();
        fill_and_probe(&mut map, src);
    });

    bench!("DashMap", {
        let map = DashMap::new();
        for (key, val) in src {
            map.insert(key.clone(), val.clone());
        }
        for (key, _) in src {
            assert!(map.contains_key(key));
        }
    });
}

fn main() {
    env_logger::init();
    let input = make_random_string_pairs(NUM_PAIRS);
    println!("bench single threaded, {} pairs", input.len());
    bench_map(&input);
}
