//! Server configuration, read from the environment.
use std::env;

use musiclib_catalog::CatalogConfig;

pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_LOCAL_SERVER_URL: &str = "http://localhost:8787";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means any origin.
    pub cors_origins: Vec<String>,
    /// Server advertised in the OpenAPI document to local callers.
    pub local_server_url: String,
    pub catalog: CatalogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
            local_server_url: DEFAULT_LOCAL_SERVER_URL.to_string(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            local_server_url: env::var("LOCAL_SERVER_URL")
                .unwrap_or(defaults.local_server_url),
            catalog: CatalogConfig::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
