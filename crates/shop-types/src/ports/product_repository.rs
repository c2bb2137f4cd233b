use async_trait::async_trait;

use crate::domain::product::{Product, ProductFilter};
use crate::ports::RepoError;

#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Fails with `RepoError::Duplicate` when a product of the same name
    /// (case-insensitive) already exists.
    async fn create(&self, product: Product) -> Result<Product, RepoError>;

    async fn get(&self, id: &str) -> Result<Option<Product>, RepoError>;

    async fn update(&self, product: Product) -> Result<Option<Product>, RepoError>;

    /// Sets the absolute stock level. `None` when the id is absent.
    async fn update_stock(&self, id: &str, stock: u32) -> Result<Option<Product>, RepoError>;

    async fn delete(&self, id: &str) -> Result<bool, RepoError>;

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepoError>;
}
