/// The error type returned when a [`HashTableBuilder`][builder] rejects its
/// configuration.
///
/// [builder]: ./struct.HashTableBuilder.html
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The table was configured with zero buckets, leaving nowhere to place a
    /// key.
    #[error("a hash table needs at least one bucket, but the capacity was set to 0")]
    ZeroCapacity,
}
