use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, options, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the full application router around `state`.
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route(
            "/artists",
            get(api::artists::list_artists).post(api::artists::create_artist),
        )
        .route(
            "/artists/{id}",
            get(api::artists::get_artist)
                .put(api::artists::update_artist)
                .delete(api::artists::delete_artist),
        )
        .route(
            "/albums",
            get(api::albums::list_albums).post(api::albums::create_album),
        )
        .route(
            "/albums/{id}",
            get(api::albums::get_album)
                .put(api::albums::update_album)
                .delete(api::albums::delete_album),
        )
        .route(
            "/songs",
            get(api::songs::list_songs).post(api::songs::create_song),
        )
        .route(
            "/songs/{id}",
            get(api::songs::get_song)
                .put(api::songs::update_song)
                .delete(api::songs::delete_song),
        )
        .route("/songs/{id}/audio", post(api::audio::upload_audio))
        .nest("/auth", api::auth::routes())
        .nest("/methods", api::methods::routes())
        .route("/untagged-route", get(api::docs::untagged_route));

    Router::new()
        .route("/", get(api::docs::banner))
        .route("/favicon.ico", get(api::docs::favicon))
        .route("/openapi.json", get(api::docs::openapi_document))
        .route("/reference", get(api::docs::reference))
        .nest("/api", api_routes)
        .layer(cors_layer(cors_origins))
        // Past the CORS layer, so OPTIONS reaches the handler instead of a preflight
        .route("/api/methods/options", options(api::methods::ok))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

/// Any origin unless an allow-list is configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        tracing::info!("CORS allowed origins: {:?}", origins);
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::TRACE,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::api::test_util::{send, test_app};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn preflight(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header("Origin", "http://localhost:3000")
            .header("Access-Control-Request-Method", "PUT")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_answers_preflight_on_catalog_routes() {
        let app = test_app();
        let resp = app.oneshot(preflight("/api/artists/1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_options_method_route_skips_cors() {
        let app = test_app();
        let (status, body) = send(&app, preflight("/api/methods/options")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");

        let resp = app.oneshot(preflight("/api/methods/options")).await.unwrap();
        assert!(resp.headers().get("access-control-allow-origin").is_none());
        assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
    }
}
