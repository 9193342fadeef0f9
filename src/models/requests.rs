//! Validated requests for word administration.
//!
//! Each request is built through a constructor that checks its required
//! fields, so the services never see a blank word.

use super::WordId;
use crate::{Error, Result};

fn required_word(field: &str, word: Option<&str>) -> Result<String> {
    match word.map(str::trim) {
        Some(w) if !w.is_empty() => Ok(w.to_string()),
        _ => Err(Error::InvalidInput(format!("{field} cannot be empty"))),
    }
}

/// Request to add a new sensitive word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWordRequest {
    word: String,
}

impl NewWordRequest {
    /// Creates an add request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the word is missing or blank.
    pub fn new(word: Option<&str>) -> Result<Self> {
        Ok(Self {
            word: required_word("sensitive word", word)?,
        })
    }

    /// Returns the trimmed word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Request to rename an existing sensitive word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWordRequest {
    id: Option<WordId>,
    from_word: String,
    to_word: String,
}

impl UpdateWordRequest {
    /// Creates an update request. Non-positive ids are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either word is missing or blank.
    pub fn new(id: Option<i64>, from_word: Option<&str>, to_word: Option<&str>) -> Result<Self> {
        let from_word = required_word("fromWord", from_word)?;
        let to_word = required_word("toWord", to_word)?;
        Ok(Self {
            id: WordId::from_request(id),
            from_word,
            to_word,
        })
    }

    /// Returns the optional target id.
    #[must_use]
    pub const fn id(&self) -> Option<WordId> {
        self.id
    }

    /// Returns the existing word.
    #[must_use]
    pub fn from_word(&self) -> &str {
        &self.from_word
    }

    /// Returns the replacement word.
    #[must_use]
    pub fn to_word(&self) -> &str {
        &self.to_word
    }
}

/// Request to remove a sensitive word by id, by text, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveWordRequest {
    id: Option<WordId>,
    word: Option<String>,
}

impl RemoveWordRequest {
    /// Creates a remove request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if no positive id is given and the
    /// word is missing or blank.
    pub fn new(id: Option<i64>, word: Option<&str>) -> Result<Self> {
        let id = WordId::from_request(id);
        let word = word
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(ToString::to_string);
        if id.is_none() && word.is_none() {
            return Err(Error::InvalidInput(
                "sensitive word or id is required to delete and cannot be empty".to_string(),
            ));
        }
        Ok(Self { id, word })
    }

    /// Returns the optional target id.
    #[must_use]
    pub const fn id(&self) -> Option<WordId> {
        self.id
    }

    /// Returns the optional target word.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Describes the target for log and error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match (&self.word, self.id) {
            (Some(word), _) => word.clone(),
            (None, Some(id)) => format!("#{id}"),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None ; "missing")]
    #[test_case(Some("") ; "empty")]
    #[test_case(Some("  ") ; "spaces")]
    fn test_new_word_rejects_blank(word: Option<&str>) {
        assert!(matches!(
            NewWordRequest::new(word),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_word_trims() {
        let request = NewWordRequest::new(Some("  mean ")).unwrap();
        assert_eq!(request.word(), "mean");
    }

    #[test]
    fn test_update_requires_both_words() {
        assert!(UpdateWordRequest::new(None, Some("bad"), Some(" ")).is_err());
        assert!(UpdateWordRequest::new(None, None, Some("nice")).is_err());

        let request = UpdateWordRequest::new(Some(0), Some("bad"), Some("mean")).unwrap();
        assert_eq!(request.id(), None);
        assert_eq!(request.from_word(), "bad");
        assert_eq!(request.to_word(), "mean");
    }

    #[test_case(None, None ; "nothing")]
    #[test_case(Some(0), Some("") ; "zero id and empty word")]
    #[test_case(Some(-1), Some("   ") ; "negative id and blank word")]
    fn test_remove_requires_id_or_word(id: Option<i64>, word: Option<&str>) {
        assert!(matches!(
            RemoveWordRequest::new(id, word),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_remove_accepts_id_only() {
        let request = RemoveWordRequest::new(Some(2), None).unwrap();
        assert_eq!(request.id(), Some(WordId::new(2)));
        assert_eq!(request.word(), None);
        assert_eq!(request.describe(), "#2");
    }
}
