use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::view::{ViewProductParams, ViewProductUseCase};
use crate::domain::view::model::{RenderInstruction, ViewName, ViewPayload};

pub struct ViewProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewProductUseCase for ViewProductUseCaseImpl {
    async fn execute(&self, params: ViewProductParams) -> Result<RenderInstruction, ProductError> {
        self.logger
            .info(&format!("Viewing product: {}", params.product.id));

        Ok(RenderInstruction::new(
            ViewName::ProductView,
            ViewPayload::Product(params.product),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_render_view_page_with_resolved_product() {
        let mut logger = MockLog::new();
        logger.expect_info().times(1).returning(|_| ());
        let now = Utc::now();
        let product = Product::from_repository(
            ProductId::new(3),
            UserId::new(1),
            "Lamp".to_string(),
            "L-3".to_string(),
            "Desk lamp".to_string(),
            BigDecimal::from(25),
            2,
            "lamp.png".to_string(),
            now,
            now,
        );

        let use_case = ViewProductUseCaseImpl {
            logger: Arc::new(logger),
        };

        let render = use_case
            .execute(ViewProductParams {
                product: product.clone(),
            })
            .await
            .unwrap();

        assert_eq!(render.view, ViewName::ProductView);
        assert_eq!(render.payload, ViewPayload::Product(product));
    }
}
