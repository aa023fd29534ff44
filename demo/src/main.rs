//! Scripted walk through a `HashTable`: insert three fruits, overwrite one,
//! remove another, then print every bucket.
//!
//! Run with `RUST_LOG=bucketmap=trace` to see each insert, update and unlink.

mod logger;

use std::error::Error;

use bucketmap::HashTable;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    logger::initialize_logger();

    let mut table: HashTable<String, i32> = HashTable::builder().build()?;
    info!("created table with {} buckets", table.capacity());

    table.put("apple".to_string(), 1);
    table.put("banana".to_string(), 2);
    table.put("orange".to_string(), 3);
    table.put("banana".to_string(), 4);

    println!("banana: {:?}", table.get("banana"));
    table.remove("apple");
    println!("apple after removal: {:?}", table.get("apple"));
    println!("size: {}", table.len());

    print!("{}", table.dump());
    Ok(())
}
