//! Phrase sanitization.
//!
//! Masks every sensitive word found in a phrase with a run of [`MASK_CHAR`]
//! of the same character length. Matching is a case-insensitive substring
//! scan: there are no word boundaries, so `"cat"` also masks the start of
//! `"category"`.

use crate::Result;
use crate::models::{Phrase, SensitiveWord};
use crate::storage::WordRepository;
use std::sync::Arc;
use tracing::instrument;

/// Character used to mask sensitive words.
pub const MASK_CHAR: char = '*';

/// Service that censors sensitive words in phrases.
pub struct SanitizeService {
    repository: Arc<dyn WordRepository>,
}

impl SanitizeService {
    /// Creates a new sanitize service.
    #[must_use]
    pub fn new(repository: Arc<dyn WordRepository>) -> Self {
        Self { repository }
    }

    /// Masks every sensitive word in `phrase`.
    ///
    /// Words are applied once each, in storage order, against the phrase as
    /// already masked by earlier words. An empty word list returns the
    /// phrase unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded.
    #[instrument(skip(self, phrase), fields(phrase_length = phrase.as_str().len()))]
    pub fn sanitize(&self, mut phrase: Phrase) -> Result<Phrase> {
        tracing::info!(phrase = %phrase, "Sanitizing phrase");
        metrics::counter!("sanitize_requests_total").increment(1);

        let words = self.repository.get_all(false)?;
        if words.is_empty() {
            tracing::warn!("No sensitive words loaded");
            return Ok(phrase);
        }

        let masked = replace_sensitive_words(&mut phrase, &words);
        metrics::counter!("sanitize_masked_words_total")
            .increment(u64::try_from(masked).unwrap_or(u64::MAX));
        Ok(phrase)
    }

    /// Validates `text` as a [`Phrase`] and sanitizes it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] for blank text, or an error if
    /// the word list cannot be loaded.
    pub fn sanitize_text(&self, text: &str) -> Result<String> {
        self.sanitize(Phrase::new(text)?).map(Phrase::into_inner)
    }
}

/// Applies each word to the phrase in order; returns how many words matched.
fn replace_sensitive_words(phrase: &mut Phrase, words: &[SensitiveWord]) -> usize {
    let mut matched = 0;
    for sensitive in words {
        if let Some(masked) = mask_word(phrase.as_str(), &sensitive.word) {
            tracing::debug!(word = %sensitive.word, "Found sensitive word in phrase");
            phrase.replace_text(masked);
            matched += 1;
        }
    }
    matched
}

/// Replaces every case-insensitive occurrence of `word` in `text` with
/// [`MASK_CHAR`], scanning left to right without overlap.
///
/// Returns `None` when `word` is empty or does not occur.
#[must_use]
pub fn mask_word(text: &str, word: &str) -> Option<String> {
    let needle: Vec<char> = word.chars().collect();
    if needle.is_empty() {
        return None;
    }

    let haystack: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut found = false;
    let mut i = 0;

    while i < haystack.len() {
        let candidate = haystack.get(i..i + needle.len());
        if candidate.is_some_and(|window| chars_match(window, &needle)) {
            out.extend(std::iter::repeat_n(MASK_CHAR, needle.len()));
            i += needle.len();
            found = true;
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }

    found.then_some(out)
}

fn chars_match(window: &[char], needle: &[char]) -> bool {
    window
        .iter()
        .zip(needle)
        .all(|(a, b)| a == b || a.to_lowercase().eq(b.to_lowercase()))
}
