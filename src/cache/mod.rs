//! Key/value caching with absolute expiry.
//!
//! The repository reads its word list snapshot through the [`Cache`] trait,
//! so tests and alternative deployments can inject their own cache.

mod memory;

pub use memory::{DEFAULT_CAPACITY, MemoryCache};

use std::time::Duration;

/// A key/value cache whose entries expire a fixed time after being set.
///
/// Each call is atomic for its key. There is no read-modify-write
/// transaction across calls.
pub trait Cache<V>: Send + Sync {
    /// Returns the value for `key` if present and not expired.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key`, replacing any previous entry. The entry
    /// expires `ttl` after this call.
    fn set(&self, key: &str, value: V, ttl: Duration);

    /// Discards the entry for `key`, if any.
    fn remove(&self, key: &str);
}
