//! One route per HTTP method, for exercising API tooling.
//!
//! `OPTIONS /api/methods/options` is registered by `build_router` outside
//! the CORS layer, which would otherwise answer it as a preflight.

use axum::{
    routing::{delete, get, head, patch, post, put, trace},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get", get(ok))
        .route("/head", head(ok))
        .route("/trace", trace(ok))
        .route("/put", put(ok))
        .route("/delete", delete(ok))
        .route("/post", post(ok))
        .route("/patch", patch(ok))
}

pub async fn ok() -> &'static str {
    "OK"
}
