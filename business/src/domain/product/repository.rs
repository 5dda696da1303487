use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

/// Storage port for products.
///
/// Implementations hold no business rules. Each call must be atomic on its
/// own; callers do not assume atomicity across calls.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    /// Persists a new product and assigns its id.
    /// Fails with `RepositoryError::Duplicated` when the name is already taken.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when the id does not exist.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when the id does not exist.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
