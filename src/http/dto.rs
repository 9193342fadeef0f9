//! Request and response bodies.
//!
//! Every request field is optional so that missing values reach the
//! validating constructors and are reported as invalid input rather than
//! as deserialization failures.

use crate::Result;
use crate::models::{NewWordRequest, RemoveWordRequest, UpdateWordRequest};
use serde::{Deserialize, Serialize};

/// Body of `POST /sensitiveword`.
#[derive(Debug, Default, Deserialize)]
pub struct NewWordBody {
    /// Word to add.
    pub word: Option<String>,
}

impl NewWordBody {
    /// Validates the body.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if the word is missing or blank.
    pub fn into_request(self) -> Result<NewWordRequest> {
        NewWordRequest::new(self.word.as_deref())
    }
}

/// Body of `PUT /sensitiveword`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordBody {
    /// Optional id of the entry to rename.
    pub id: Option<i64>,
    /// Current text of the entry.
    pub from_word: Option<String>,
    /// Replacement text.
    pub to_word: Option<String>,
}

impl UpdateWordBody {
    /// Validates the body.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if either word is missing or blank.
    pub fn into_request(self) -> Result<UpdateWordRequest> {
        UpdateWordRequest::new(self.id, self.from_word.as_deref(), self.to_word.as_deref())
    }
}

/// Body of `DELETE /sensitiveword`.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveWordBody {
    /// Optional id of the entry to remove.
    pub id: Option<i64>,
    /// Optional text of the entry to remove.
    pub word: Option<String>,
}

impl RemoveWordBody {
    /// Validates the body.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if neither a positive id nor a word
    /// is given.
    pub fn into_request(self) -> Result<RemoveWordRequest> {
        RemoveWordRequest::new(self.id, self.word.as_deref())
    }
}

/// Confirmation returned by write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Human-readable confirmation.
    pub message: String,
}
