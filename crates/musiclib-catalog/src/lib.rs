use std::env;

pub mod entities;
mod error;
mod seed;
mod store;

pub use error::{CatalogError, ResourceKind};
pub use store::CatalogStore;

pub type Result<T> = std::result::Result<T, CatalogError>;

const DEFAULT_AUDIO_BASE_URL: &str = "https://example.com/audio";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Prefix of the placeholder audio URLs handed out for songs.
    pub audio_base_url: String,
    /// Load the fixed demo records at start-up.
    pub seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            seed: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let audio_base_url = env::var("AUDIO_BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIO_BASE_URL.to_string());

        Self {
            audio_base_url,
            seed: env::var("CATALOG_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
