// config.rs - Catalog client configuration
//
// The endpoint is fixed in production; CATALOG_ENDPOINT (read from the
// environment or a .env file) only exists so tests and local tooling can
// point the client at another server.

use std::env;
use thiserror::Error;
use url::Url;

/// The public catalog endpoint the page renders
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Environment variable overriding the catalog endpoint
pub const CATALOG_ENDPOINT_VAR: &str = "CATALOG_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog endpoint '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: Url,
}

impl CatalogConfig {
    /// Load configuration from the environment, falling back to the
    /// public endpoint.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let endpoint = env::var(CATALOG_ENDPOINT_VAR).ok();
        Self::from_endpoint(endpoint.as_deref())
    }

    pub fn from_endpoint(endpoint: Option<&str>) -> Result<Self, ConfigError> {
        let value = endpoint
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_CATALOG_ENDPOINT);

        let endpoint = Url::parse(value).map_err(|source| ConfigError::InvalidEndpoint {
            value: value.to_string(),
            source,
        })?;

        Ok(Self { endpoint })
    }
}
