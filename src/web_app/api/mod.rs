// web_app/api/mod.rs - Native side of the catalog fetch
//
// client.rs talks HTTP to the catalog endpoint; registry.rs holds the
// process-wide client the server function uses.

pub mod client;

#[cfg(feature = "ssr")]
pub mod registry;

pub use client::CatalogClient;
