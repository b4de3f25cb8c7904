//! Catalog service client.
//!
//! Pages talk to the catalog through [`CatalogApi`]; [`HttpCatalogApi`] is
//! the production implementation over `reqwest`.

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use storefront_core::errors::ErrorBody;
use storefront_core::models::{CreateProductRequest, Product};
use storefront_core::session::SessionMarker;
use tracing::warn;

use crate::errors::ClientError;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Product>, ClientError>;

    async fn get_item(&self, id: u64) -> Result<Product, ClientError>;

    /// Create a record. `session` is forwarded so a write-protected
    /// service accepts the call.
    async fn create_item(
        &self,
        item: &CreateProductRequest,
        session: Option<SessionMarker>,
    ) -> Result<Product, ClientError>;
}

/// HTTP client for the catalog service.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// `base_url` includes the `/api` prefix, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create with a custom reqwest [`Client`] (for timeouts, proxies, etc.).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_items(&self) -> Result<Vec<Product>, ClientError> {
        let res = self.client.get(self.url("/items")).send().await?;
        decode(res).await
    }

    async fn get_item(&self, id: u64) -> Result<Product, ClientError> {
        let res = self.client.get(self.url(&format!("/items/{id}"))).send().await?;
        decode(res).await
    }

    async fn create_item(
        &self,
        item: &CreateProductRequest,
        session: Option<SessionMarker>,
    ) -> Result<Product, ClientError> {
        let mut req = self.client.post(self.url("/items")).json(item);
        if let Some(marker) = session {
            req = req.header(header::COOKIE, marker.header_value());
        }
        decode(req.send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }
    if !status.is_success() {
        let message = res
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
        warn!(status = status.as_u16(), %message, "catalog request rejected");
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(res.json::<T>().await?)
}
