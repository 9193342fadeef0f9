//! Service container wiring the store, cache and services together.

use super::{SanitizeService, SensitiveWordService};
use crate::Result;
use crate::cache::MemoryCache;
use crate::config::CensorConfig;
use crate::storage::{CachedWordRepository, SqliteWordStore, WordRepository};
use std::sync::Arc;

/// Shared handles to the sanitizer and word administration services.
///
/// Both services read through the same repository, so a write made through
/// [`SensitiveWordService`] invalidates the snapshot the sanitizer reads.
#[derive(Clone)]
pub struct ServiceContainer {
    sanitizer: Arc<SanitizeService>,
    words: Arc<SensitiveWordService>,
}

impl ServiceContainer {
    /// Builds services over an existing repository.
    #[must_use]
    pub fn from_repository(repository: Arc<dyn WordRepository>) -> Self {
        Self {
            sanitizer: Arc::new(SanitizeService::new(Arc::clone(&repository))),
            words: Arc::new(SensitiveWordService::new(repository)),
        }
    }

    /// Opens the configured database, applies `seed_words` to an empty
    /// table and builds the cached repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the database
    /// cannot be opened or seeded.
    pub fn from_config(config: &CensorConfig) -> Result<Self> {
        config.validate()?;

        let store = SqliteWordStore::new(&config.database_path)?;
        store.seed_if_empty(&config.seed_words)?;
        tracing::debug!(path = %store.db_path().display(), "Opened word store");

        let repository = CachedWordRepository::new(
            Arc::new(store),
            Arc::new(MemoryCache::new(config.cache.capacity)),
        )
        .with_ttl(config.cache.ttl);

        Ok(Self::from_repository(Arc::new(repository)))
    }

    /// Returns the sanitizer.
    #[must_use]
    pub fn sanitizer(&self) -> Arc<SanitizeService> {
        Arc::clone(&self.sanitizer)
    }

    /// Returns the word administration service.
    #[must_use]
    pub fn words(&self) -> Arc<SensitiveWordService> {
        Arc::clone(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewWordRequest, Phrase};

    #[test]
    fn test_from_config_seeds_and_shares_repository() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CensorConfig::default().with_database_path(dir.path().join("words.db"));
        config.seed_words = vec!["bad".to_string()];

        let services = ServiceContainer::from_config(&config).unwrap();
        assert_eq!(services.words().get_all().unwrap().len(), 1);

        services
            .words()
            .add(&NewWordRequest::new(Some("ugly")).unwrap())
            .unwrap();
        let phrase = services
            .sanitizer()
            .sanitize(Phrase::new("bad and ugly").unwrap())
            .unwrap();
        assert_eq!(phrase.as_str(), "*** and ****");
    }

    #[test]
    fn test_from_config_rejects_empty_database_path() {
        let config = CensorConfig::default().with_database_path("");
        assert!(ServiceContainer::from_config(&config).is_err());
    }
}
