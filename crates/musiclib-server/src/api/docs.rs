use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

use crate::{openapi, AppState};

const FAVICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">🎵</text></svg>"#;

const REFERENCE_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <title>Music Library API Reference</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <script id="api-reference" data-url="/openapi.json"></script>
    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
  </body>
</html>
"#;

/// GET /
pub async fn banner() -> &'static str {
    "** Music Library API **"
}

/// GET /favicon.ico
pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FAVICON_SVG)
}

/// GET /api/untagged-route
///
/// Left out of the OpenAPI document
pub async fn untagged_route() -> &'static str {
    "woah how did u find me im untagged"
}

/// GET /openapi.json
pub async fn openapi_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<serde_json::Value> {
    let origin = openapi::request_origin(&headers, &uri);
    Json(openapi::document_for(&origin, &state.local_server_url))
}

/// GET /reference
///
/// Interactive viewer for /openapi.json
pub async fn reference() -> Html<&'static str> {
    Html(REFERENCE_HTML)
}

#[cfg(test)]
mod tests {
    use super::super::test_util::{get, send, send_json, test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    #[tokio::test]
    async fn test_banner() {
        let app = test_app();
        let (status, body) = send(&app, get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"** Music Library API **");
    }

    #[tokio::test]
    async fn test_untagged_route() {
        let app = test_app();
        let (status, body) = send(&app, get("/api/untagged-route")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"woah how did u find me im untagged");
    }

    #[tokio::test]
    async fn test_favicon_is_svg() {
        let app = test_app();
        let resp = tower::ServiceExt::oneshot(app, get("/favicon.ico"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "image/svg+xml");
    }

    #[tokio::test]
    async fn test_reference_points_at_document() {
        let app = test_app();
        let (status, body) = send(&app, get("/reference")).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains(r#"data-url="/openapi.json""#));
    }

    #[tokio::test]
    async fn test_openapi_for_localhost() {
        let app = test_app();
        let req = Request::builder()
            .uri("/openapi.json")
            .header("Host", "localhost:8787")
            .body(Body::empty())
            .unwrap();
        let (status, doc) = send_json(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8787");
        assert_eq!(doc["servers"][0]["description"], "Local development server");
    }

    #[tokio::test]
    async fn test_openapi_for_public_host() {
        let app = test_app();
        let req = Request::builder()
            .uri("/openapi.json")
            .header("Host", "music.example.com")
            .body(Body::empty())
            .unwrap();
        let (_, doc) = send_json(&app, req).await;
        assert!(doc["servers"].as_array().unwrap().is_empty());
        assert_eq!(doc["info"]["title"], "Music Library API");
    }
}
