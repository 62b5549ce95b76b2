//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use projects::{Catalog, CatalogError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },
    #[error("project catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served under `/assets` (images, intro video).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTFOLIO_ASSETS_DIR`: default `assets/` at the workspace root
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        let assets_dir = std::env::var("PORTFOLIO_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_assets_dir());
        Ok(Self { port, assets_dir })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

/// Validate the embedded catalog. The page and the API share this data, so
/// a bad file stops startup instead of serving a broken gallery.
pub fn load_catalog() -> Result<Catalog, ConfigError> {
    Ok(Catalog::embedded()?)
}
