//! Data models for wordcensor.
//!
//! This module contains the word entity, the phrase value object and the
//! validated request values consumed by the services.

mod phrase;
mod requests;
mod word;

pub use phrase::Phrase;
pub use requests::{NewWordRequest, RemoveWordRequest, UpdateWordRequest};
pub use word::{SensitiveWord, WordId, words_equal};
