use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::view::model::RenderInstruction;

pub struct ViewProductParams {
    pub product: Product,
}

#[async_trait]
pub trait ViewProductUseCase: Send + Sync {
    async fn execute(&self, params: ViewProductParams) -> Result<RenderInstruction, ProductError>;
}
