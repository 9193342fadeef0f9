//! Cache-or-store word repository.

use super::{WordRepository, WordStore};
use crate::Result;
use crate::cache::Cache;
use crate::models::{SensitiveWord, WordId};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Cache key holding the full word list snapshot.
pub const WORD_LIST_CACHE_KEY: &str = "sensitive_words.all";

/// Default lifetime of the word list snapshot (10 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// [`WordRepository`] that serves reads from a cached snapshot and
/// invalidates it after every write.
///
/// Writes invalidate unconditionally, including when the store call fails,
/// so a partially applied write is never hidden behind a stale snapshot.
pub struct CachedWordRepository {
    store: Arc<dyn WordStore>,
    cache: Arc<dyn Cache<Vec<SensitiveWord>>>,
    ttl: Duration,
}

impl CachedWordRepository {
    /// Creates a repository with the default snapshot lifetime.
    #[must_use]
    pub fn new(store: Arc<dyn WordStore>, cache: Arc<dyn Cache<Vec<SensitiveWord>>>) -> Self {
        Self {
            store,
            cache,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Sets the snapshot lifetime.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the snapshot lifetime.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    fn invalidate(&self) {
        self.cache.remove(WORD_LIST_CACHE_KEY);
    }
}

impl WordRepository for CachedWordRepository {
    #[instrument(skip(self))]
    fn get_all(&self, force_refresh: bool) -> Result<Vec<SensitiveWord>> {
        if !force_refresh
            && let Some(words) = self.cache.get(WORD_LIST_CACHE_KEY)
        {
            metrics::counter!("word_cache_hits_total").increment(1);
            return Ok(words);
        }

        metrics::counter!("word_cache_misses_total").increment(1);
        let words = self.store.select_all()?;
        tracing::debug!(count = words.len(), "Loaded sensitive words from store");
        self.cache.set(WORD_LIST_CACHE_KEY, words.clone(), self.ttl);
        Ok(words)
    }

    fn create(&self, word: &str) -> Result<bool> {
        let result = self.store.insert(word);
        self.invalidate();
        result
    }

    fn update(&self, entity: &SensitiveWord) -> Result<bool> {
        let result = self.store.update(entity);
        self.invalidate();
        result
    }

    fn delete(&self, id: WordId) -> Result<bool> {
        let result = self.store.delete(id);
        self.invalidate();
        result
    }
}
