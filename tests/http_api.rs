//! HTTP API tests driven through the router without a socket.
#![cfg(feature = "http")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wordcensor::http::router;
use wordcensor::storage::WordStore;
use wordcensor::{CachedWordRepository, MemoryCache, ServiceContainer, SqliteWordStore};

fn app(words: &[&str]) -> Router {
    let store = SqliteWordStore::in_memory().unwrap();
    for word in words {
        store.insert(word).unwrap();
    }
    let repository = CachedWordRepository::new(Arc::new(store), Arc::new(MemoryCache::default()));
    router(ServiceContainer::from_repository(Arc::new(repository)))
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(&[]), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_sanitize_masks_words() {
    let app = app(&["bad"]);
    let response = app
        .clone()
        .oneshot(post("/sanitize/This%20is%20BAD"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"This is ***");
}

#[tokio::test]
async fn test_sanitize_blank_phrase_is_bad_request() {
    let (status, body) = send_json(&app(&["bad"]), post("/sanitize/%20%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid input"));
}

#[tokio::test]
async fn test_sanitize_empty_segment_is_bad_request() {
    let (status, body) = send_json(&app(&["bad"]), post("/sanitize/")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid input"));
}

#[tokio::test]
async fn test_list_words() {
    let (status, body) = send_json(&app(&["bad", "ugly"]), get("/sensitiveword")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 1, "word": "bad"}, {"id": 2, "word": "ugly"}])
    );
}

#[tokio::test]
async fn test_list_empty_is_not_found() {
    let (status, body) = send_json(&app(&[]), get("/sensitiveword")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_add_word() {
    let app = app(&[]);
    let (status, body) = send_json(
        &app,
        json_request(Method::POST, "/sensitiveword", &json!({"word": "bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("'bad'"));

    let (_, body) = send(&app, post("/sanitize/bad%20day")).await;
    assert_eq!(body, "*** day");
}

#[tokio::test]
async fn test_add_duplicate_is_conflict() {
    let (status, _) = send_json(
        &app(&["bad"]),
        json_request(Method::POST, "/sensitiveword", &json!({"word": "BAD"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_add_blank_is_bad_request() {
    let app = app(&[]);
    let (status, _) = send_json(
        &app,
        json_request(Method::POST, "/sensitiveword", &json!({"word": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        json_request(Method::POST, "/sensitiveword", &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/sensitiveword")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app(&[]), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_word() {
    let app = app(&["bad"]);
    let (status, body) = send_json(
        &app,
        json_request(
            Method::PUT,
            "/sensitiveword",
            &json!({"fromWord": "Bad", "toWord": "mean"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "word": "mean"}));
}

#[tokio::test]
async fn test_update_status_mapping() {
    let app = app(&["bad", "ugly"]);

    let (status, _) = send_json(
        &app,
        json_request(
            Method::PUT,
            "/sensitiveword",
            &json!({"fromWord": "mean", "toWord": "nice"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        json_request(
            Method::PUT,
            "/sensitiveword",
            &json!({"fromWord": "bad", "toWord": "UGLY"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send_json(
        &app,
        json_request(Method::PUT, "/sensitiveword", &json!({"fromWord": "bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_word() {
    let app = app(&["bad", "ugly"]);
    let (status, body) = send_json(
        &app,
        json_request(Method::DELETE, "/sensitiveword", &json!({"word": "UGLY"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 2, "word": "ugly"}));

    let (status, body) = send_json(
        &app,
        json_request(Method::DELETE, "/sensitiveword", &json!({"id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "bad");

    let (status, _) = send_json(&app, get("/sensitiveword")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_status_mapping() {
    let app = app(&["bad"]);

    let (status, _) = send_json(
        &app,
        json_request(Method::DELETE, "/sensitiveword", &json!({"word": "mean"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        json_request(
            Method::DELETE,
            "/sensitiveword",
            &json!({"id": 0, "word": " "}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let app = app(&[]);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn test_security_headers() {
    let response = app(&[]).oneshot(get("/health")).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
}
