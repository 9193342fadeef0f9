//! Storage layer for the sensitive word list.
//!
//! Two layers, each behind its own trait:
//!
//! | Layer | Trait | Implementation | Purpose |
//! |-------|-------|----------------|---------|
//! | Store | [`WordStore`] | [`SqliteWordStore`] | Source of truth, one SQL statement per call |
//! | Repository | [`WordRepository`] | [`CachedWordRepository`] | Cache-or-store reads, invalidate on write |
//!
//! Services depend only on [`WordRepository`].

mod repository;
pub mod sqlite;
mod traits;

pub use repository::{CachedWordRepository, DEFAULT_CACHE_TTL, WORD_LIST_CACHE_KEY};
pub use sqlite::SqliteWordStore;
pub use traits::{WordRepository, WordStore};
