// Shared test utilities for integration tests
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use musiclib_catalog::CatalogStore;
use musiclib_server::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_AUDIO_BASE_URL: &str = "https://audio.test.local";
pub const TEST_LOCAL_SERVER_URL: &str = "http://localhost:8787";

/// Create a router over a freshly seeded catalog
pub fn test_app() -> Router {
    let state = Arc::new(AppState::new(
        CatalogStore::seeded(TEST_AUDIO_BASE_URL),
        TEST_LOCAL_SERVER_URL,
    ));
    build_router(state, &[])
}

/// Create a router over an empty catalog
pub fn empty_app() -> Router {
    let state = Arc::new(AppState::new(
        CatalogStore::empty(TEST_AUDIO_BASE_URL),
        TEST_LOCAL_SERVER_URL,
    ));
    build_router(state, &[])
}

pub async fn call(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn send_json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
