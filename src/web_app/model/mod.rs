// web_app/model/mod.rs - Shared data models for client and server
//
// These types travel from the catalog endpoint through the server function
// to the browser, so everything here must compile for both native and WASM.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

mod error;

pub use error::FetchError;

/// Rating block of a catalog entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Product as returned by the catalog endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String, // carried but not rendered
    pub rating: Rating,
}

/// The three mutually exclusive states of the catalog view
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<Product>),
}

impl CatalogState {
    /// Collapse a finished fetch into the state the view renders.
    pub fn from_fetch(result: Result<Vec<Product>, FetchError>) -> Self {
        match result {
            Ok(products) => CatalogState::Loaded(products),
            Err(e) => CatalogState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Loaded products, empty for the other states
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// `$` followed by the price rounded half away from zero to two decimals.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Subtitle shown above the table
pub fn loaded_label(count: usize) -> String {
    format!("{} products loaded from API", count)
}

/// Rate as a plain number and the count wrapped in parentheses.
pub fn format_rating(rating: &Rating) -> (String, String) {
    (rating.rate.to_string(), format!("({})", rating.count))
}
