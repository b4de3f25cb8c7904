//! Page server binary

use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use storefront_core::auth::StaticCredentials;
use storefront_core::config::{config_path, StorefrontConfig};
use storefront_core::telemetry::init_tracing;
use storefront_web::client::HttpCatalogApi;
use storefront_web::create_app;
use storefront_web::state::AppState;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::load().context("loading configuration")?;
    init_tracing(&config.observability);
    match config_path() {
        Some(path) => info!(path = %path, "Loaded config file"),
        None => info!("No config file set, using defaults and environment"),
    }

    let catalog = HttpCatalogApi::new(&config.web.api_base_url);
    let credentials = StaticCredentials::from_config(&config.auth);
    let state = AppState::new(Arc::new(catalog), Arc::new(credentials));

    let address = (config.web.host.clone(), config.web.port);
    let server = HttpServer::new(move || create_app(state.clone()))
        .bind(&address)
        .with_context(|| format!("binding {}:{}", address.0, address.1))?;

    info!(
        api = %config.web.api_base_url,
        "Web server running on http://{}:{}", address.0, address.1
    );

    server.run().await.context("running web server")?;
    info!("Web server stopped");
    Ok(())
}
