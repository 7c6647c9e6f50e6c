use std::sync::Arc;

use musiclib_server::{build_router, AppState, ServerConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "musiclib_server=info,musiclib_catalog=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::from_env();
    if !config.catalog.seed {
        tracing::info!("CATALOG_SEED=false, starting with an empty catalog");
    }
    tracing::info!(audio_base_url = %config.catalog.audio_base_url, "catalog ready");

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state, &config.cors_origins);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "server started");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
