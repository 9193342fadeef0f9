//! Route handlers.
//!
//! Services are synchronous and hold the `SQLite` connection lock, so every
//! call is moved onto the blocking pool.

use super::dto::{MessageBody, NewWordBody, RemoveWordBody, UpdateWordBody};
use super::error::ApiError;
use crate::models::{Phrase, SensitiveWord};
use crate::services::ServiceContainer;
use crate::{Error, Result};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::operation("spawn_blocking", e))?
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

/// `POST /sanitize/{phrase}`
pub async fn sanitize(
    State(services): State<ServiceContainer>,
    Path(phrase): Path<String>,
) -> std::result::Result<String, ApiError> {
    let phrase = Phrase::new(phrase)?;
    let sanitizer = services.sanitizer();
    let sanitized = run_blocking(move || sanitizer.sanitize(phrase)).await?;
    Ok(sanitized.into_inner())
}

/// `POST /sanitize/` with an empty phrase segment.
pub async fn sanitize_empty() -> ApiError {
    ApiError::from(Error::InvalidInput(
        "missing or invalid phrase to sanitize".to_string(),
    ))
}

/// `GET /sensitiveword`
pub async fn list_words(
    State(services): State<ServiceContainer>,
) -> std::result::Result<Json<Vec<SensitiveWord>>, ApiError> {
    let words = services.words();
    let all = run_blocking(move || words.get_all()).await?;
    if all.is_empty() {
        tracing::warn!("The sensitive words list is empty");
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            "the sensitive words list is empty",
        ));
    }
    Ok(Json(all))
}

/// `POST /sensitiveword`
pub async fn add_word(
    State(services): State<ServiceContainer>,
    payload: std::result::Result<Json<NewWordBody>, JsonRejection>,
) -> std::result::Result<Json<MessageBody>, ApiError> {
    let Json(body) = payload?;
    let request = body.into_request()?;
    let words = services.words();
    let word = request.word().to_string();
    run_blocking(move || words.add(&request)).await?;

    Ok(Json(MessageBody {
        message: format!("the word '{word}' was added to the sensitive words list"),
    }))
}

/// `PUT /sensitiveword`
pub async fn update_word(
    State(services): State<ServiceContainer>,
    payload: std::result::Result<Json<UpdateWordBody>, JsonRejection>,
) -> std::result::Result<Json<SensitiveWord>, ApiError> {
    let Json(body) = payload?;
    let request = body.into_request()?;
    let words = services.words();
    let updated = run_blocking(move || words.update(&request)).await?;
    Ok(Json(updated))
}

/// `DELETE /sensitiveword`
pub async fn remove_word(
    State(services): State<ServiceContainer>,
    payload: std::result::Result<Json<RemoveWordBody>, JsonRejection>,
) -> std::result::Result<Json<SensitiveWord>, ApiError> {
    let Json(body) = payload?;
    let request = body.into_request()?;
    let words = services.words();
    let removed = run_blocking(move || words.remove(&request)).await?;
    Ok(Json(removed))
}
