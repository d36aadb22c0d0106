use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::store::{StoreProductParams, StoreProductUseCase};
use crate::domain::routing::model::RouteName;
use crate::domain::view::model::RedirectInstruction;

pub struct StoreProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StoreProductUseCase for StoreProductUseCaseImpl {
    async fn execute(
        &self,
        params: StoreProductParams,
    ) -> Result<RedirectInstruction, ProductError> {
        self.logger.info(&format!(
            "Storing product {} for user {}",
            params.fields.sku, params.owner
        ));

        let product = self
            .repository
            .create(&params.owner, &params.fields)
            .await?;

        self.logger
            .info(&format!("Product stored with id: {}", product.id));
        Ok(RedirectInstruction::to(RouteName::ProductsIndex))
    }
}
