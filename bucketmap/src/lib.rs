//! A fixed-capacity hash table with separate chaining.
//!
//! [`HashTable`] keeps an array of buckets chosen at construction time (16 by
//! default). Each bucket holds a singly linked chain of entries; a key always
//! lives in the bucket its hash selects, and inserting an existing key
//! overwrites its value in place. The bucket array is never resized.
//!
//! ```rust
//! use bucketmap::HashTable;
//!
//! let mut table = HashTable::new();
//! table.put("apple", 1);
//! table.put("banana", 2);
//! table.put("orange", 3);
//! table.put("banana", 4);
//!
//! assert_eq!(table.get(&"banana"), Some(&4));
//! assert_eq!(table.len(), 3);
//!
//! table.remove(&"apple");
//! assert_eq!(table.get(&"apple"), None);
//! assert_eq!(table.len(), 2);
//!
//! print!("{}", table.dump());
//! ```
//!
//! The table is single-threaded. Share it across threads by wrapping the
//! whole table in a lock.

mod builder;
mod dump;
mod error;
mod map;

pub use builder::HashTableBuilder;
pub use dump::{BucketListing, Dump};
pub use error::BuildError;
pub use map::{HashTable, Map, LONG_CHAIN_THRESHOLD, NULL_KEY_BUCKET};
