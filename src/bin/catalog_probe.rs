// Fetch the catalog once from the command line and print a short summary.
// Exits non-zero when the fetch fails.

use anyhow::Result;
use catalog_view::config::CatalogConfig;
use catalog_view::web_app::api::CatalogClient;
use catalog_view::web_app::model::{format_price, loaded_label};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    println!("Fetching catalog from {}...", config.endpoint);

    let client = CatalogClient::from_config(&config)?;
    let products = client.fetch_products().await?;

    println!("✓ {}", loaded_label(products.len()));

    for product in products.iter().take(5) {
        println!(
            "  - #{} {} [{}] {} ★ {} ({})",
            product.id,
            product.title,
            product.category,
            format_price(product.price),
            product.rating.rate,
            product.rating.count
        );
    }

    if products.len() > 5 {
        println!("  ... and {} more", products.len() - 5);
    }

    Ok(())
}
