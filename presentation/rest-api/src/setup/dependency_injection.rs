use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::add::AddProductUseCaseImpl;
use business::application::product::destroy::DestroyProductUseCaseImpl;
use business::application::product::edit::EditProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::resolve::ResolveProductUseCaseImpl;
use business::application::product::store::StoreProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::view::ViewProductUseCaseImpl;

use crate::api::page::PageRenderer;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let renderer = Arc::new(PageRenderer::new(
            config.routing.clone(),
            config.asset_version.clone(),
        ));

        // Product use cases
        let resolve_use_case = Arc::new(ResolveProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let view_use_case = Arc::new(ViewProductUseCaseImpl {
            logger: logger.clone(),
        });
        let edit_use_case = Arc::new(EditProductUseCaseImpl {
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            logger: logger.clone(),
        });
        let store_use_case = Arc::new(StoreProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let destroy_use_case = Arc::new(DestroyProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            resolve_use_case,
            list_use_case,
            view_use_case,
            edit_use_case,
            add_use_case,
            store_use_case,
            update_use_case,
            destroy_use_case,
            renderer,
        );

        Ok(Self {
            health_api,
            product_api,
        })
    }
}
