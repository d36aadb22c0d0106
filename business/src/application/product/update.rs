use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::view::model::{RenderInstruction, ViewName, ViewPayload};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn not_found_or_repository(e: RepositoryError) -> ProductError {
    match e {
        RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateProductParams,
    ) -> Result<RenderInstruction, ProductError> {
        let id = params.product.id;
        self.logger.info(&format!("Updating product: {}", id));

        self.repository
            .update(id, &params.fields)
            .await
            .map_err(not_found_or_repository)?;

        // The resolved copy is stale after the write.
        let refreshed = self
            .repository
            .get_by_id(id)
            .await
            .map_err(not_found_or_repository)?;

        self.logger.info(&format!("Product updated: {}", id));
        Ok(RenderInstruction::new(
            ViewName::ProductEdit,
            ViewPayload::Product(refreshed),
        ))
    }
}
