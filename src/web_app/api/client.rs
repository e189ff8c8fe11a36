// web_app/api/client.rs - HTTP client for the catalog endpoint

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::config::CatalogConfig;
use crate::web_app::model::{FetchError, Product};

/// Builds the default headers for the client.
fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Client for the catalog endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its
/// connection pool between clones.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(endpoint: Url) -> Result<Self, FetchError> {
        let http = Client::builder().default_headers(build_headers()).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, FetchError> {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one GET to the catalog endpoint and parse the product list.
    ///
    /// Non-success statuses, network failures, and undecodable bodies all
    /// come back as a [`FetchError`]. Nothing is retried.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::info!("Fetching product catalog from {}", self.endpoint);

        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog endpoint answered {}", status);
            return Err(FetchError::status());
        }

        let products: Vec<Product> = response.json().await?;
        tracing::info!("Fetched {} products", products.len());

        Ok(products)
    }
}
