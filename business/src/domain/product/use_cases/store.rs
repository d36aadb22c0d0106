use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductFields;
use crate::domain::shared::value_objects::UserId;
use crate::domain::view::model::RedirectInstruction;

pub struct StoreProductParams {
    pub owner: UserId,
    pub fields: ProductFields,
}

#[async_trait]
pub trait StoreProductUseCase: Send + Sync {
    async fn execute(&self, params: StoreProductParams)
    -> Result<RedirectInstruction, ProductError>;
}
