//! Sensitive word administration.
//!
//! Enforces that no two stored words are equal ignoring case before any
//! write reaches the repository. The check reads the cached list and is not
//! transactional with the write that follows it.

use crate::models::{NewWordRequest, RemoveWordRequest, SensitiveWord, UpdateWordRequest};
use crate::storage::WordRepository;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::instrument;

/// Service for sensitive word CRUD operations.
pub struct SensitiveWordService {
    repository: Arc<dyn WordRepository>,
}

impl SensitiveWordService {
    /// Creates a new sensitive word service.
    #[must_use]
    pub fn new(repository: Arc<dyn WordRepository>) -> Self {
        Self { repository }
    }

    /// Returns every sensitive word in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded.
    pub fn get_all(&self) -> Result<Vec<SensitiveWord>> {
        tracing::info!("Fetching all sensitive words from the repository");
        self.repository.get_all(false)
    }

    /// Adds a new sensitive word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if the word already exists ignoring
    /// case, or an error if the store write fails.
    #[instrument(skip(self), fields(word = %request.word()))]
    pub fn add(&self, request: &NewWordRequest) -> Result<()> {
        let word = request.word();
        let words = self.get_all()?;

        if words.iter().any(|sw| sw.matches(word)) {
            tracing::warn!(word, "The sensitive word already exists in the list");
            return Err(Error::Duplicate {
                word: word.to_string(),
            });
        }

        if self.repository.create(word)? {
            Ok(())
        } else {
            Err(Error::operation("insert_word", "no rows were inserted"))
        }
    }

    /// Renames an existing sensitive word.
    ///
    /// The target is the first entry in storage order whose id equals the
    /// request id or whose text matches `from_word` ignoring case. Returns
    /// the entry as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no target exists, [`Error::Duplicate`]
    /// if `to_word` matches another entry ignoring case, or an error if the
    /// store write fails.
    #[instrument(skip(self), fields(from = %request.from_word(), to = %request.to_word()))]
    pub fn update(&self, request: &UpdateWordRequest) -> Result<SensitiveWord> {
        let words = self.get_all()?;

        let existing = words
            .iter()
            .find(|sw| request.id() == Some(sw.id) || sw.matches(request.from_word()))
            .ok_or_else(|| {
                tracing::warn!(
                    from_word = request.from_word(),
                    "The word does not exist in the sensitive words list"
                );
                Error::NotFound {
                    word: request.from_word().to_string(),
                }
            })?;

        let collides = words
            .iter()
            .any(|sw| sw.id != existing.id && sw.matches(request.to_word()));
        if collides {
            tracing::warn!(
                to_word = request.to_word(),
                "The word already exists in the sensitive words list"
            );
            return Err(Error::Duplicate {
                word: request.to_word().to_string(),
            });
        }

        let updated = SensitiveWord::new(existing.id, request.to_word());
        if self.repository.update(&updated)? {
            Ok(updated)
        } else {
            Err(Error::NotFound {
                word: request.from_word().to_string(),
            })
        }
    }

    /// Removes a sensitive word by id or text. Returns the removed entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry matches, or an error if the
    /// store write fails.
    #[instrument(skip(self), fields(lookup = %request.describe()))]
    pub fn remove(&self, request: &RemoveWordRequest) -> Result<SensitiveWord> {
        let words = self.get_all()?;

        let existing = words
            .into_iter()
            .find(|sw| {
                request.id() == Some(sw.id) || request.word().is_some_and(|w| sw.matches(w))
            })
            .ok_or_else(|| {
                tracing::warn!(
                    lookup = %request.describe(),
                    "The word does not exist in the sensitive words list"
                );
                Error::NotFound {
                    word: request.describe(),
                }
            })?;

        if self.repository.delete(existing.id)? {
            Ok(existing)
        } else {
            Err(Error::NotFound {
                word: request.describe(),
            })
        }
    }
}
