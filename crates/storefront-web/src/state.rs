//! Shared handler state

use std::sync::Arc;

use storefront_core::auth::CredentialVerifier;

use crate::client::CatalogApi;

/// Backends the page handlers talk to, shared across workers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogApi>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogApi>, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            catalog,
            credentials,
        }
    }
}
