use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::edit::{EditProductParams, EditProductUseCase};
use crate::domain::view::model::{RenderInstruction, ViewName, ViewPayload};

pub struct EditProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EditProductUseCase for EditProductUseCaseImpl {
    async fn execute(&self, params: EditProductParams) -> Result<RenderInstruction, ProductError> {
        self.logger
            .info(&format!("Editing product: {}", params.product.id));

        Ok(RenderInstruction::new(
            ViewName::ProductEdit,
            ViewPayload::Product(params.product),
        ))
    }
}
