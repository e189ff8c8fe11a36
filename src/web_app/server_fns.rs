// web_app/server_fns.rs - Leptos server function declarations
//
// These are accessible from both client (WASM) and server (native Rust).
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::CatalogClient, ServerFnError> {
    use crate::web_app::api::{registry, CatalogClient};

    // First try context (for testing or if manually provided)
    if let Some(client) = use_context::<CatalogClient>() {
        return Ok(client);
    }

    if let Some(client) = registry::get_client() {
        return Ok(client);
    }

    Err(ServerFnError::new("Catalog client not available"))
}

/// Fetch the product catalog from the external endpoint
#[server(GetCatalog, "/api")]
pub async fn get_catalog() -> Result<Vec<Product>, ServerFnError> {
    let client = client()?;

    let result = client.fetch_products().await;

    match &result {
        Ok(products) => tracing::info!("Catalog request served: {} products", products.len()),
        Err(e) => tracing::error!("Catalog request failed: {}", e),
    }

    result.map_err(|e: FetchError| ServerFnError::new(e.message()))
}
