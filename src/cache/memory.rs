//! In-process cache backed by an LRU map.

use super::Cache;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default number of keys kept before least-recently-set eviction.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// In-memory [`Cache`] with per-entry absolute expiry.
///
/// # Lock Poisoning
///
/// A poisoned lock fails open: reads report a miss and writes are skipped.
/// The next read then goes to the backing store, which is always correct.
pub struct MemoryCache<V> {
    entries: RwLock<LruCache<String, CacheEntry<V>>>,
}

impl<V: Clone> MemoryCache<V> {
    /// Creates a cache holding at most `capacity` keys. A capacity of zero
    /// is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(cap)),
        }
    }

    /// Returns the number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Returns true if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V> Cache<V> for MemoryCache<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> Option<V> {
        let hit = {
            let entries = self.entries.read().ok()?;
            entries.peek(key).cloned()
        };

        match hit {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value),
            Some(_) => {
                tracing::debug!(key, "Cache entry expired");
                self.remove(key);
                None
            },
            None => None,
        }
    }

    fn set(&self, key: &str, value: V, ttl: Duration) {
        let Ok(mut entries) = self.entries.write() else {
            tracing::warn!(key, "Cache lock poisoned, skipping set");
            return;
        };
        entries.put(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.pop(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_and_get() {
        let cache = MemoryCache::new(4);
        cache.set("words", vec!["bad".to_string()], Duration::from_secs(60));
        assert_eq!(cache.get("words"), Some(vec!["bad".to_string()]));
        assert_eq!(cache.get("other"), None);
    }

    #[test]
    fn test_entry_expires() {
        let cache = MemoryCache::new(4);
        cache.set("words", 1_u32, Duration::from_millis(20));
        assert_eq!(cache.get("words"), Some(1));

        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get("words"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove() {
        let cache = MemoryCache::new(4);
        cache.set("words", 1_u32, Duration::from_secs(60));
        cache.remove("words");
        assert_eq!(cache.get("words"), None);
        cache.remove("words");
    }

    #[test]
    fn test_set_replaces_value() {
        let cache = MemoryCache::new(4);
        cache.set("words", 1_u32, Duration::from_secs(60));
        cache.set("words", 2_u32, Duration::from_secs(60));
        assert_eq!(cache.get("words"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_capacity_holds_one_entry() {
        let cache = MemoryCache::new(0);
        cache.set("a", 1_u32, Duration::from_secs(60));
        cache.set("b", 2_u32, Duration::from_secs(60));
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(MemoryCache::new(4));
        let handles: Vec<_> = (0..8_u32)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    cache.set("shared", i, Duration::from_secs(60));
                    cache.get("shared")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
        assert_eq!(cache.len(), 1);
    }
}
