use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::view::model::RenderInstruction;

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<RenderInstruction, ProductError>;
}
