use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::destroy::{DestroyProductParams, DestroyProductUseCase};
use crate::domain::routing::model::RouteName;
use crate::domain::view::model::RedirectInstruction;

pub struct DestroyProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DestroyProductUseCase for DestroyProductUseCaseImpl {
    async fn execute(
        &self,
        params: DestroyProductParams,
    ) -> Result<RedirectInstruction, ProductError> {
        let id = params.product.id;
        self.logger.info(&format!("Deleting product: {}", id));

        self.repository.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        })?;

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(RedirectInstruction::to(RouteName::ProductsIndex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{Product, ProductFields};
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn create(&self, owner: &UserId, fields: &ProductFields) -> Result<Product, RepositoryError>;
            async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<(), RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i64) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::new(id),
            UserId::new(1),
            "Old Stock".to_string(),
            format!("OS-{id}"),
            "Discontinued".to_string(),
            BigDecimal::from(1),
            0,
            "old.png".to_string(),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_delete_product_and_redirect_to_index() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .times(1)
            .withf(|id| *id == ProductId::new(9))
            .returning(|_| Ok(()));

        let use_case = DestroyProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DestroyProductParams {
                product: product(9),
            })
            .await;

        assert_eq!(result.unwrap().route, RouteName::ProductsIndex);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleted_concurrently() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DestroyProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DestroyProductParams {
                product: product(9),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_persistence_failure_when_delete_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DestroyProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DestroyProductParams {
                product: product(2),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
