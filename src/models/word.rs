//! Sensitive word entity and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-assigned identifier of a sensitive word.
///
/// The store only assigns positive ids; requests treat `<= 0` as "no id".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(i64);

impl WordId {
    /// Creates a new word ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Creates a word ID from an optional request value, dropping non-positive ids.
    #[must_use]
    pub fn from_request(id: Option<i64>) -> Option<Self> {
        id.filter(|id| *id > 0).map(Self)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A sensitive word stored in the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveWord {
    /// Unique identifier assigned by the store.
    pub id: WordId,
    /// The word text.
    pub word: String,
}

impl SensitiveWord {
    /// Creates a new sensitive word entry.
    #[must_use]
    pub fn new(id: impl Into<WordId>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
        }
    }

    /// Returns true if this entry's text equals `other` ignoring case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        words_equal(&self.word, other)
    }
}

/// Compares two words for equality ignoring case.
///
/// Uses per-character Unicode lowercase mapping, so `"BAD"` equals `"bad"`
/// and `"ÄRGER"` equals `"ärger"`.
#[must_use]
pub fn words_equal(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a
            .chars()
            .zip(b.chars())
            .all(|(x, y)| x == y || x.to_lowercase().eq(y.to_lowercase()))
}
