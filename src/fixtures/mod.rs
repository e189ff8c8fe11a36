// fixtures/mod.rs - Canned catalog responses
//
// Tests need a catalog endpoint that answers the same way every time. Each
// fixture is a response body the mock endpoint can serve; well-formed ones
// can also be decoded straight into products.

use crate::web_app::model::Product;

pub mod products;

pub use products::{FakeStoreProducts, MalformedCatalog};

/// A response body served by a mock catalog endpoint
pub trait CatalogFixture {
    /// Raw JSON body
    fn body() -> &'static str;

    /// The body decoded as a product list
    fn products() -> serde_json::Result<Vec<Product>> {
        serde_json::from_str(Self::body())
    }
}
