pub mod albums;
pub mod artists;
pub mod audio;
pub mod auth;
pub mod docs;
pub mod methods;
pub mod songs;

use musiclib_catalog::ResourceKind;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted(kind: ResourceKind) -> Self {
        Self {
            message: format!("{kind} deleted successfully"),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use musiclib_catalog::CatalogStore;
    use tower::ServiceExt;

    use crate::{build_router, AppState};

    pub fn test_app() -> Router {
        let state = Arc::new(AppState::new(
            CatalogStore::seeded("https://example.com/audio"),
            "http://localhost:8787",
        ));
        build_router(state, &[])
    }

    pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = send(app, req).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_message() {
        let msg = MessageResponse::deleted(ResourceKind::Song);
        assert_eq!(msg.message, "Song deleted successfully");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["message"], "Song deleted successfully");
    }
}
