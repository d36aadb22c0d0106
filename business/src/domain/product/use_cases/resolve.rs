use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct ResolveProductParams {
    pub id: ProductId,
}

/// Looks a product up by identifier ahead of any entity-scoped operation.
#[async_trait]
pub trait ResolveProductUseCase: Send + Sync {
    async fn execute(&self, params: ResolveProductParams) -> Result<Product, ProductError>;
}
