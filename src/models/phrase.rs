//! Phrase value object.

use crate::{Error, Result};
use std::fmt;

/// Text submitted for sanitization.
///
/// A `Phrase` is never blank: [`Phrase::new`] rejects empty and
/// whitespace-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase(String);

impl Phrase {
    /// Creates a phrase, rejecting empty or whitespace-only text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is blank.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "missing or invalid phrase to sanitize".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// Returns the phrase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the phrase and returns its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Replaces the text. Only the sanitizer rewrites a phrase, and a masked
    /// phrase keeps its length so it stays non-blank.
    pub(crate) fn replace_text(&mut self, text: String) {
        self.0 = text;
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case("\t\n" ; "tabs and newlines")]
    fn test_blank_phrase_rejected(text: &str) {
        let result = Phrase::new(text);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_phrase_keeps_surrounding_whitespace() {
        let phrase = Phrase::new("  This is bad ").unwrap();
        assert_eq!(phrase.as_str(), "  This is bad ");
        assert_eq!(phrase.to_string(), "  This is bad ");
    }
}
