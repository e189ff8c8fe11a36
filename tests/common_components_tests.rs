use catalog_view::fixtures::{CatalogFixture, FakeStoreProducts};
use catalog_view::web_app::components::catalog::*;
use catalog_view::web_app::components::common::*;
use leptos::prelude::*;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        // Test default props
        let _ = Loading(LoadingProps {
            message: "Loading...",
        });

        let html = Loading(LoadingProps {
            message: "Loading products…",
        })
        .to_html();
        assert!(html.contains("Loading products…"));
    });
}

#[test]
fn test_error_display_instantiation() {
    with_runtime(|| {
        let html = ErrorDisplay(ErrorDisplayProps {
            error: "Test Error".to_string(),
        })
        .to_html();
        assert!(html.contains("Test Error"));
        assert!(html.contains("role=\"alert\""));
    });
}

#[test]
fn test_badge_instantiation() {
    with_runtime(|| {
        let variants = ["green", "indigo", "gray", "custom"];
        for variant in variants {
            let _ = Badge(BadgeProps {
                children: Box::new(move || view! { "Badge" }.into_any()),
                variant,
            });
        }
    });
}

#[test]
fn test_star_icon_instantiation() {
    with_runtime(|| {
        let html = StarIcon().to_html();
        assert!(html.contains("<svg"));
    });
}

#[test]
fn test_product_row_instantiation() {
    with_runtime(|| {
        for product in FakeStoreProducts::products().unwrap() {
            let id = product.id;
            let html = ProductRow(ProductRowProps { product }).to_html();
            assert!(html.contains(&format!("data-product-id=\"{}\"", id)));
        }
    });
}

#[test]
fn test_catalog_header_instantiation() {
    with_runtime(|| {
        let html = CatalogHeader(CatalogHeaderProps { count: 20 }).to_html();
        assert!(html.contains("20 products loaded from API"));
    });
}

#[test]
fn test_screens_instantiation() {
    with_runtime(|| {
        let _ = LoadingScreen();
        let _ = ErrorScreen(ErrorScreenProps {
            message: "Failed to fetch products".to_string(),
        });
    });
}
