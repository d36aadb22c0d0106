use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::view::model::RedirectInstruction;

pub struct DestroyProductParams {
    pub product: Product,
}

#[async_trait]
pub trait DestroyProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DestroyProductParams,
    ) -> Result<RedirectInstruction, ProductError>;
}
