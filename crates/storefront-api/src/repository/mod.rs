//! Repository module
//!
//! Data access layer. Handlers only see [`ProductRepository`]; the in-memory
//! implementation is the only one shipped.

pub mod memory;

use async_trait::async_trait;
use storefront_core::models::Product;

use crate::errors::RepoResult;
use crate::models::{NewProduct, ProductPatch};

pub use memory::InMemoryProductRepository;

/// Product storage as seen by the HTTP handlers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> RepoResult<Vec<Product>>;

    async fn find_by_id(&self, id: u64) -> RepoResult<Product>;

    /// Assign the next identifier and append.
    async fn create(&self, new: NewProduct) -> RepoResult<Product>;

    /// Apply `patch` in place and return the updated record.
    async fn update(&self, id: u64, patch: ProductPatch) -> RepoResult<Product>;

    /// Remove and return the record.
    async fn delete(&self, id: u64) -> RepoResult<Product>;
}
