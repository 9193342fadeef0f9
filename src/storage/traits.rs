//! Storage trait definitions.

use crate::Result;
use crate::models::{SensitiveWord, WordId};

/// Trait for sensitive word store backends.
///
/// Each write reports whether at least one row was affected.
pub trait WordStore: Send + Sync {
    /// Returns every stored word in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn select_all(&self) -> Result<Vec<SensitiveWord>>;

    /// Inserts a new word and lets the store assign its id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Duplicate`] if the store itself rejects the
    /// word as a duplicate, or an operation error if it cannot be written.
    fn insert(&self, word: &str) -> Result<bool>;

    /// Sets the text of the entry with `entity.id` to `entity.word`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn update(&self, entity: &SensitiveWord) -> Result<bool>;

    /// Deletes the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete(&self, id: WordId) -> Result<bool>;
}

/// Trait for reading and writing the word list through a cache.
pub trait WordRepository: Send + Sync {
    /// Returns the full word list.
    ///
    /// Serves the cached snapshot unless it is missing, expired, or
    /// `force_refresh` is set, in which case the store is queried and the
    /// snapshot replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the store must be queried and fails.
    fn get_all(&self, force_refresh: bool) -> Result<Vec<SensitiveWord>>;

    /// Inserts a word and invalidates the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    fn create(&self, word: &str) -> Result<bool>;

    /// Persists `entity` by id and invalidates the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    fn update(&self, entity: &SensitiveWord) -> Result<bool>;

    /// Deletes by id and invalidates the snapshot.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    fn delete(&self, id: WordId) -> Result<bool>;
}
