use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::add::AddProductUseCase;
use crate::domain::view::model::{RenderInstruction, ViewName, ViewPayload};

pub struct AddProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self) -> Result<RenderInstruction, ProductError> {
        self.logger.debug("Rendering add product form");
        Ok(RenderInstruction::new(ViewName::ProductAdd, ViewPayload::Empty))
    }
}
