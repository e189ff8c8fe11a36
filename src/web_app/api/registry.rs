// web_app/api/registry.rs - Process-wide catalog client
//
// The server binary installs one client at startup; server functions pick
// it up from here. Tests can swap in a client pointed at a mock endpoint.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::CatalogClient;

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<CatalogClient>> = Mutex::new(None);

/// Initialize the global catalog client
pub fn init_client(client: CatalogClient) {
    tracing::info!("Initializing global catalog client for {}", client.endpoint());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: CatalogClient) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(client);
}

/// Get the global catalog client
pub fn get_client() -> Option<CatalogClient> {
    // Check for test override first
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_some() {
        tracing::debug!("Global catalog client retrieved");
    } else {
        tracing::warn!("Global catalog client is not initialized");
    }
    client
}
