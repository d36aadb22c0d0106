use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ProductId, UserId};

use super::model::{Product, ProductFields};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Also used to refresh a stale in-memory copy after a write.
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn create(
        &self,
        owner: &UserId,
        fields: &ProductFields,
    ) -> Result<Product, RepositoryError>;
    async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
