// tests/catalog_client_tests.rs
// CatalogClient against a local mock endpoint

mod common;

use actix_web::http::StatusCode;
use catalog_view::config::CatalogConfig;
use catalog_view::fixtures::{CatalogFixture, FakeStoreProducts, MalformedCatalog};
use catalog_view::web_app::api::CatalogClient;
use catalog_view::web_app::model::{loaded_label, CatalogState};
use common::{closed_endpoint, MockCatalog};

#[actix_web::test]
async fn test_fetch_products_success() -> anyhow::Result<()> {
    let mock = MockCatalog::start(StatusCode::OK, FakeStoreProducts::body()).await?;
    let client = CatalogClient::new(mock.url.clone())?;

    let products = client.fetch_products().await?;

    assert_eq!(products, FakeStoreProducts::products()?);
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 5, 9, 18]);

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_fetch_empty_catalog() -> anyhow::Result<()> {
    let mock = MockCatalog::start(StatusCode::OK, "[]").await?;
    let client = CatalogClient::new(mock.url.clone())?;

    let state = CatalogState::from_fetch(client.fetch_products().await);
    assert_eq!(state, CatalogState::Loaded(vec![]));
    assert_eq!(loaded_label(state.products().len()), "0 products loaded from API");

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_non_ok_status_is_fetch_error() -> anyhow::Result<()> {
    for status in [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_FOUND, StatusCode::TOO_MANY_REQUESTS] {
        // A valid catalog body must not rescue a failed status
        let mock = MockCatalog::start(status, FakeStoreProducts::body()).await?;
        let client = CatalogClient::new(mock.url.clone())?;

        let err = client.fetch_products().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch products", "status {}", status);

        mock.stop().await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_malformed_body_is_fetch_error() -> anyhow::Result<()> {
    let mock = MockCatalog::start(StatusCode::OK, MalformedCatalog::body()).await?;
    let client = CatalogClient::new(mock.url.clone())?;

    let err = client.fetch_products().await.unwrap_err();
    assert!(
        err.message().contains("error decoding response body"),
        "unexpected message: {}",
        err
    );

    mock.stop().await;
    Ok(())
}

#[actix_web::test]
async fn test_network_failure_keeps_underlying_message() -> anyhow::Result<()> {
    let client = CatalogClient::new(closed_endpoint()?)?;

    let state = CatalogState::from_fetch(client.fetch_products().await);
    let message = state.error().unwrap_or_default();

    assert!(message.contains("error sending request"), "unexpected message: {}", message);
    assert_ne!(message, "Failed to fetch products");
    Ok(())
}

#[test]
fn test_client_from_config() -> anyhow::Result<()> {
    let config = CatalogConfig::from_endpoint(Some("http://127.0.0.1:4000/products"))?;
    let client = CatalogClient::from_config(&config)?;
    assert_eq!(client.endpoint(), &config.endpoint);
    Ok(())
}
