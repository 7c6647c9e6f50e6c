use musiclib_catalog::CatalogStore;

use crate::config::ServerConfig;

/// Application state shared across handlers
pub struct AppState {
    pub catalog: CatalogStore,
    pub local_server_url: String,
}

impl AppState {
    pub fn new(catalog: CatalogStore, local_server_url: impl Into<String>) -> Self {
        Self {
            catalog,
            local_server_url: local_server_url.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            CatalogStore::new(&config.catalog),
            config.local_server_url.clone(),
        )
    }
}
