//! In-memory product repository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use storefront_core::models::{seed_products, Product};
use tracing::debug;

use super::ProductRepository;
use crate::errors::{RepoResult, RepositoryError};
use crate::models::{NewProduct, ProductPatch};

struct Catalog {
    items: Vec<Product>,
    /// Never decremented, so deleted identifiers are never handed out again.
    next_id: u64,
}

pub struct InMemoryProductRepository {
    catalog: RwLock<Catalog>,
}

impl InMemoryProductRepository {
    /// Repository holding `items`; the counter starts after the largest id.
    pub fn with_products(items: Vec<Product>) -> Self {
        let next_id = items.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self {
            catalog: RwLock::new(Catalog { items, next_id }),
        }
    }

    /// Repository holding the six demo records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn empty() -> Self {
        Self::with_products(Vec::new())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Catalog>> {
        self.catalog.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Catalog>> {
        self.catalog.write().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> RepoResult<Vec<Product>> {
        Ok(self.read()?.items.clone())
    }

    async fn find_by_id(&self, id: u64) -> RepoResult<Product> {
        self.read()?
            .items
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, new: NewProduct) -> RepoResult<Product> {
        let mut catalog = self.write()?;
        let id = catalog.next_id;
        catalog.next_id += 1;

        let product = new.into_product(id);
        catalog.items.push(product.clone());
        debug!(id, total = catalog.items.len(), "product appended");
        Ok(product)
    }

    async fn update(&self, id: u64, patch: ProductPatch) -> RepoResult<Product> {
        let mut catalog = self.write()?;
        let product = catalog
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        patch.apply(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: u64) -> RepoResult<Product> {
        let mut catalog = self.write()?;
        let index = catalog
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(catalog.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "desc".to_string(),
            long_description: String::new(),
            price: 5.0,
            category: "other".to_string(),
            stock: 1,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn seeded_lists_in_insertion_order() {
        let repo = InMemoryProductRepository::seeded();
        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_appends() {
        let repo = InMemoryProductRepository::seeded();
        let created = repo.create(new_product("Pen")).await.unwrap();
        assert_eq!(created.id, 7);
        assert_eq!(repo.list().await.unwrap().last().unwrap().name, "Pen");
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::seeded();
        let removed = repo.delete(6).await.unwrap();
        assert_eq!(removed.name, "Webcam");
        let created = repo.create(new_product("Pen")).await.unwrap();
        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn empty_repository_starts_at_one() {
        let repo = InMemoryProductRepository::empty();
        assert_eq!(repo.create(new_product("First")).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = InMemoryProductRepository::seeded();
        assert!(matches!(repo.find_by_id(99).await, Err(RepositoryError::NotFound)));
        assert!(matches!(
            repo.update(99, ProductPatch::default()).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(repo.delete(99).await, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn update_mutates_in_place() {
        let repo = InMemoryProductRepository::seeded();
        let patch = ProductPatch {
            stock: Some(42),
            ..Default::default()
        };
        repo.update(3, patch).await.unwrap();
        assert_eq!(repo.find_by_id(3).await.unwrap().stock, 42);
    }
}
