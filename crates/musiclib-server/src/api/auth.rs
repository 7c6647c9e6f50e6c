//! Demo auth routes.
//!
//! Each route only looks at whether a header is present (and, for the HTTP
//! schemes, its prefix). No credential is ever verified.

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/basic", get(basic))
        .route("/bearer", get(bearer))
        .route("/key", get(api_key))
        .route("/google", get(google))
}

type TextResponse = (StatusCode, &'static str);

/// Non-UTF-8 values count as present but never match a scheme.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .map(|v| v.to_str().unwrap_or_default())
}

/// GET /api/auth/basic
pub async fn basic(headers: HeaderMap) -> TextResponse {
    match header_str(&headers, header::AUTHORIZATION.as_str()) {
        None => (
            StatusCode::UNAUTHORIZED,
            "bad kitty, you didn't even sent a Authorization header!",
        ),
        Some(value) if !value.starts_with("Basic") => (
            StatusCode::UNAUTHORIZED,
            "bad kitty, the Authorization header needs to be Basic auth!",
        ),
        Some(_) => (StatusCode::OK, "meow :)"),
    }
}

/// GET /api/auth/bearer
pub async fn bearer(headers: HeaderMap) -> TextResponse {
    match header_str(&headers, header::AUTHORIZATION.as_str()) {
        None => (
            StatusCode::UNAUTHORIZED,
            "bad doggo, you didn't even sent a Authorization header!",
        ),
        Some(value) if !value.starts_with("Bearer") => (
            StatusCode::UNAUTHORIZED,
            "bad doggo, the Authorization header needs to be Bearer auth!",
        ),
        Some(_) => (StatusCode::OK, "woof :)"),
    }
}

/// GET /api/auth/key
///
/// The key value is not checked
pub async fn api_key(headers: HeaderMap) -> TextResponse {
    match header_str(&headers, "x-api-key") {
        None => (
            StatusCode::UNAUTHORIZED,
            "bad mooer, you didn't even sent a X-API-Key header!",
        ),
        Some(_) => (StatusCode::OK, "moo :)"),
    }
}

/// GET /api/auth/google
pub async fn google() -> TextResponse {
    (StatusCode::OK, "baa :)")
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{send, test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    fn request(uri: &str, header: Option<(&str, &str)>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn call(uri: &str, header: Option<(&str, &str)>) -> (StatusCode, String) {
        let app = test_app();
        let (status, bytes) = send(&app, request(uri, header)).await;
        (status, String::from_utf8(bytes).unwrap())
    }

    #[tokio::test]
    async fn test_basic_without_header() {
        let (status, body) = call("/api/auth/basic", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "bad kitty, you didn't even sent a Authorization header!");
    }

    #[tokio::test]
    async fn test_basic_wrong_scheme() {
        let (status, body) = call("/api/auth/basic", Some(("Authorization", "Bearer abc"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            "bad kitty, the Authorization header needs to be Basic auth!"
        );
    }

    #[tokio::test]
    async fn test_basic_ok() {
        let (status, body) = call(
            "/api/auth/basic",
            Some(("Authorization", "Basic dXNlcjpwYXNz")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "meow :)");
    }

    #[tokio::test]
    async fn test_bearer_without_header() {
        let (status, body) = call("/api/auth/bearer", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "bad doggo, you didn't even sent a Authorization header!");
    }

    #[tokio::test]
    async fn test_bearer_wrong_scheme() {
        let (status, body) = call(
            "/api/auth/bearer",
            Some(("Authorization", "Basic dXNlcjpwYXNz")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            "bad doggo, the Authorization header needs to be Bearer auth!"
        );
    }

    #[tokio::test]
    async fn test_bearer_ok() {
        let (status, body) = call("/api/auth/bearer", Some(("Authorization", "Bearer t0k3n"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "woof :)");
    }

    #[tokio::test]
    async fn test_api_key() {
        let (status, body) = call("/api/auth/key", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "bad mooer, you didn't even sent a X-API-Key header!");

        // Any value is accepted
        let (status, body) = call("/api/auth/key", Some(("X-API-Key", ""))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "moo :)");
    }

    #[tokio::test]
    async fn test_google_ignores_headers() {
        let (status, body) = call("/api/auth/google", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "baa :)");
    }
}
