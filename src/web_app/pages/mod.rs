// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: the product catalog table

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
