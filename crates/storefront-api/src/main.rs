//! Catalog service binary

use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use storefront_api::create_app;
use storefront_api::repository::{InMemoryProductRepository, ProductRepository};
use storefront_core::config::{config_path, StorefrontConfig};
use storefront_core::telemetry::init_tracing;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::load().context("loading configuration")?;
    init_tracing(&config.observability);
    match config_path() {
        Some(path) => info!(path = %path, "Loaded config file"),
        None => info!("No config file set, using defaults and environment"),
    }

    let repo: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::seeded());
    let api = config.api.clone();
    let address = (api.host.clone(), api.port);

    let server = HttpServer::new(move || create_app(Arc::clone(&repo), &api))
        .bind(&address)
        .with_context(|| format!("binding {}:{}", address.0, address.1))?;

    info!(
        protect_writes = config.api.protect_writes,
        origins = ?config.api.allowed_origins,
        "API server running on http://{}:{}", address.0, address.1
    );
    info!("Health check: http://{}:{}/health", address.0, address.1);

    server.run().await.context("running API server")?;
    info!("API server stopped");
    Ok(())
}
