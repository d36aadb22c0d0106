use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::view::model::RenderInstruction;

pub struct UpdateProductParams {
    pub product: Product,
    pub fields: ProductFields,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams)
    -> Result<RenderInstruction, ProductError>;
}
