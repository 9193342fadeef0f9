//! Mapping of [`Error`] kinds onto HTTP responses.

use crate::Error;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// An error response: a status code and a `{"error": msg}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error response with an explicit status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returns the status code for an error kind.
#[must_use]
pub const fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Duplicate { .. } => StatusCode::CONFLICT,
        Error::OperationFailed { .. } | Error::FeatureNotEnabled(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        },
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        if error.is_client_error() {
            tracing::warn!(error = %error, "Request rejected");
        } else {
            tracing::error!(error = %error, "Request failed");
        }
        Self::new(status_for(&error), error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Malformed request body");
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Error::InvalidInput("blank".into()), StatusCode::BAD_REQUEST; "invalid input")]
    #[test_case(Error::NotFound { word: "mean".into() }, StatusCode::NOT_FOUND; "not found")]
    #[test_case(Error::Duplicate { word: "bad".into() }, StatusCode::CONFLICT; "duplicate")]
    #[test_case(Error::operation("select_all_words", "locked"), StatusCode::INTERNAL_SERVER_ERROR; "operation failed")]
    fn test_status_for(error: Error, expected: StatusCode) {
        assert_eq!(status_for(&error), expected);
        let api: ApiError = error.into();
        assert_eq!(api.status(), expected);
    }

    #[test]
    fn test_message_is_error_display() {
        let api: ApiError = Error::Duplicate {
            word: "bad".to_string(),
        }
        .into();
        assert_eq!(
            api.message(),
            "the word 'bad' already exists in the sensitive words list"
        );
    }
}
