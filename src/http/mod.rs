//! HTTP API.
//!
//! | Route | Method | Success |
//! |-------|--------|---------|
//! | `/sanitize/{phrase}` | POST | sanitized text |
//! | `/sanitize/` | POST | always 400 |
//! | `/sensitiveword` | GET | word list |
//! | `/sensitiveword` | POST | confirmation |
//! | `/sensitiveword` | PUT | updated entry |
//! | `/sensitiveword` | DELETE | removed entry |
//! | `/health` | GET | `ok` |
//!
//! Failures carry a `{"error": msg}` body with the status chosen by
//! [`status_for`].

mod dto;
mod error;
mod handlers;

pub use dto::{MessageBody, NewWordBody, RemoveWordBody, UpdateWordBody};
pub use error::{ApiError, status_for};

use crate::config::ServerConfig;
use crate::observability::{REQUEST_ID_HEADER, RequestContext};
use crate::services::ServiceContainer;
use crate::{Error, Result};
use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

/// Builds the application router.
pub fn router(services: ServiceContainer) -> Router {
    Router::new()
        .route("/sanitize/{phrase}", post(handlers::sanitize))
        .route("/sanitize/", post(handlers::sanitize_empty))
        .route(
            "/sensitiveword",
            get(handlers::list_words)
                .post(handlers::add_word)
                .put(handlers::update_word)
                .delete(handlers::remove_word),
        )
        .route("/health", get(handlers::health))
        // Security headers (OWASP recommendations)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(propagate_request_id))
        .with_state(services)
}

/// Echoes or generates the request id and records it on the request span.
async fn propagate_request_id(request: Request, next: Next) -> Response {
    let context = RequestContext::from_header(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    let request_id = context.request_id().to_string();
    let span = tracing::info_span!("request", request_id = %request_id);

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Binds `config.host:config.port` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: &ServerConfig, services: ServiceContainer) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::operation("bind", format!("{addr}: {e}")))?;

    tracing::info!(addr = %addr, "Starting wordcensor HTTP server");

    axum::serve(listener, router(services))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::operation("serve", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down HTTP server");
}
