// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay, Badge, StarIcon)
// - catalog.rs: Catalog view components (CatalogBody, CatalogTable, ProductRow)

pub mod common;
pub mod catalog;

// Re-export commonly used components for convenience
pub use common::*;
pub use catalog::*;
