//! # Wordcensor
//!
//! A sensitive-word censorship service.
//!
//! Callers submit a phrase and receive it back with every configured
//! sensitive word masked by a same-length run of `*`. Administrators manage
//! the word list through create, update and delete operations.
//!
//! ## Layers
//!
//! - [`storage`]: `SQLite` word store plus the cache-or-store repository
//! - [`cache`]: time-boxed in-memory snapshot of the word list
//! - [`services`]: sanitizer and word administration
//! - `http`: axum routes mapping each [`Error`] kind to a status code
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wordcensor::{CachedWordRepository, MemoryCache, Phrase, SanitizeService, SqliteWordStore};
//!
//! let store = SqliteWordStore::in_memory()?;
//! let repo = Arc::new(CachedWordRepository::new(
//!     Arc::new(store),
//!     Arc::new(MemoryCache::default()),
//! ));
//! let phrase = SanitizeService::new(repo).sanitize(Phrase::new("This is bad")?)?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cache;
pub mod cli;
pub mod config;
#[cfg(feature = "http")]
pub mod http;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use cache::{Cache, MemoryCache};
pub use config::CensorConfig;
pub use models::{
    NewWordRequest, Phrase, RemoveWordRequest, SensitiveWord, UpdateWordRequest, WordId,
};
pub use services::{SanitizeService, SensitiveWordService, ServiceContainer};
pub use storage::{CachedWordRepository, SqliteWordStore, WordRepository, WordStore};

/// Error type for wordcensor operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When | HTTP status |
/// |---------|-------------|-------------|
/// | `InvalidInput` | Blank phrase or word, delete request without id or word | 400 |
/// | `Duplicate` | Word already present under a case-insensitive comparison | 409 |
/// | `NotFound` | Update or delete target is not in the word list | 404 |
/// | `OperationFailed` | Database, lock, I/O or configuration failures | 500 |
/// | `FeatureNotEnabled` | Serving HTTP from a binary built without `http` | 500 |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The word already exists in the sensitive word list.
    #[error("the word '{word}' already exists in the sensitive words list")]
    Duplicate {
        /// The conflicting word.
        word: String,
    },

    /// The word does not exist in the sensitive word list.
    #[error("the word '{word}' does not exist in the sensitive words list")]
    NotFound {
        /// The word (or id) that was looked up.
        word: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - `SQLite` operations fail
    /// - The connection mutex is poisoned
    /// - Configuration files cannot be read or parsed
    /// - The HTTP listener cannot bind
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// Feature not enabled (requires feature flag).
    #[error("feature not enabled: {0} (compile with --features {0})")]
    FeatureNotEnabled(String),
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and any displayable cause.
    pub fn operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Returns true for errors caused by the caller rather than the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Duplicate { .. } | Self::NotFound { .. }
        )
    }
}

/// Result type alias for wordcensor operations.
pub type Result<T> = std::result::Result<T, Error>;
