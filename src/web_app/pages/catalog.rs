// web_app/pages/catalog.rs - Catalog page component
//
// Owns the fetch-then-render lifecycle: one catalog request when the page is
// first rendered, then one of Loading / Error / Loaded.

use leptos::prelude::*;

use crate::web_app::components::CatalogBody;
use crate::web_app::model::{CatalogState, Product};
use crate::web_app::server_fns::get_catalog;

/// Map the resource's current value onto the view state.
///
/// `None` means the request is still outstanding. Server errors carry the
/// fetch message verbatim so the panel shows exactly what failed.
pub fn catalog_state(result: Option<Result<Vec<Product>, ServerFnError>>) -> CatalogState {
    match result {
        None => CatalogState::Loading,
        Some(Ok(products)) => CatalogState::Loaded(products),
        Some(Err(ServerFnError::ServerError(message))) => CatalogState::Error(message),
        Some(Err(e)) => CatalogState::Error(e.to_string()),
    }
}

/// Product catalog page
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Unit source: fetched once per page view, never refetched
    let catalog = Resource::new(|| (), |_| get_catalog());

    view! {
        <Suspense fallback=|| view! { <CatalogBody state=CatalogState::Loading /> }>
            {move || view! { <CatalogBody state=catalog_state(catalog.get()) /> }}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::Rating;
    use rust_decimal::Decimal;

    fn product(id: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Decimal::new(999, 2),
            description: "Desc".to_string(),
            category: "jewelery".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.1, count: 3 },
        }
    }

    #[test]
    fn test_outstanding_request_is_loading() {
        assert_eq!(catalog_state(None), CatalogState::Loading);
    }

    #[test]
    fn test_loaded_keeps_order() {
        let state = catalog_state(Some(Ok(vec![product(3), product(1), product(2)])));
        let ids: Vec<i64> = state.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_server_error_message_is_unwrapped() {
        let state = catalog_state(Some(Err(ServerFnError::new("Failed to fetch products"))));
        assert_eq!(state.error(), Some("Failed to fetch products"));
    }

    #[test]
    fn test_other_errors_use_display() {
        let state = catalog_state(Some(Err(ServerFnError::Request("offline".to_string()))));
        let message = state.error().unwrap_or_default();
        assert!(message.contains("offline"));
    }
}
