use std::sync::Arc;

use poem::Request;
use poem::http::StatusCode;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::use_cases::add::AddProductUseCase;
use business::domain::product::use_cases::destroy::{DestroyProductParams, DestroyProductUseCase};
use business::domain::product::use_cases::edit::{EditProductParams, EditProductUseCase};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::resolve::{ResolveProductParams, ResolveProductUseCase};
use business::domain::product::use_cases::store::{StoreProductParams, StoreProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::view::{ViewProductParams, ViewProductUseCase};
use business::domain::shared::value_objects::ProductId;
use business::domain::user::model::User;
use business::domain::view::model::RenderInstruction;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::page::{PageRenderer, PageResponse};
use crate::api::product::dto::{ProductFormRequest, ProductPageData};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub struct ProductApi {
    resolve_use_case: Arc<dyn ResolveProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    view_use_case: Arc<dyn ViewProductUseCase>,
    edit_use_case: Arc<dyn EditProductUseCase>,
    add_use_case: Arc<dyn AddProductUseCase>,
    store_use_case: Arc<dyn StoreProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    destroy_use_case: Arc<dyn DestroyProductUseCase>,
    renderer: Arc<PageRenderer>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resolve_use_case: Arc<dyn ResolveProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        view_use_case: Arc<dyn ViewProductUseCase>,
        edit_use_case: Arc<dyn EditProductUseCase>,
        add_use_case: Arc<dyn AddProductUseCase>,
        store_use_case: Arc<dyn StoreProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        destroy_use_case: Arc<dyn DestroyProductUseCase>,
        renderer: Arc<PageRenderer>,
    ) -> Self {
        Self {
            resolve_use_case,
            list_use_case,
            view_use_case,
            edit_use_case,
            add_use_case,
            store_use_case,
            update_use_case,
            destroy_use_case,
            renderer,
        }
    }

    /// Parses the path identifier and loads the product it names.
    ///
    /// An identifier that cannot name a record is reported as not found.
    async fn resolve(&self, product: &str) -> Result<Product, ApiError> {
        let id = product
            .parse::<ProductId>()
            .map_err(|_| ProductError::NotFound.into_error_response())?;

        self.resolve_use_case
            .execute(ResolveProductParams { id })
            .await
            .map_err(|e| e.into_error_response())
    }

    fn page(
        &self,
        instruction: RenderInstruction,
        user: User,
        req: &Request,
    ) -> Result<PageResponse, ApiError> {
        let url = request_url(req);

        self.renderer
            .render(
                instruction.view,
                ProductPageData::from(instruction.payload),
                user,
                url,
            )
            .map_err(|e| {
                tracing::error!("Failed to render {}: {}", instruction.view, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("InternalError", "page.render_failed")),
                )
            })
    }
}

/// Path and query the client requested.
///
/// `original_uri` is only filled in by the server; requests built in-process
/// leave it at `/` and carry the target in `uri` alone.
fn request_url(req: &Request) -> &str {
    let original = req.original_uri();
    let uri = if original.path() == "/" && req.uri().path() != "/" {
        req.uri()
    } else {
        original
    };

    uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/")
}

fn validate(body: ProductFormRequest) -> Result<ProductFields, ApiError> {
    ProductFields::validate(body.into())
        .map_err(|errors| ProductError::Validation(errors).into_error_response())
}

/// Product catalog API
///
/// Page-oriented endpoints for browsing and maintaining the product catalog.
/// Reads and updates answer with a page object; create and delete redirect
/// back to the product list.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Renders the catalog index with every stored product.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self, auth: SessionBearer, req: &Request) -> PageApiResponse {
        let result = match self.list_use_case.execute().await {
            Ok(instruction) => self.page(instruction, auth.0, req),
            Err(err) => Err(err.into_error_response()),
        };

        match result {
            Ok(page) => PageApiResponse::Ok(Json(page)),
            Err((_, json)) => PageApiResponse::InternalError(json),
        }
    }

    /// Show the add-product form
    #[oai(path = "/products/add", method = "get", tag = "ApiTags::Products")]
    async fn add_product(&self, auth: SessionBearer, req: &Request) -> PageApiResponse {
        let result = match self.add_use_case.execute().await {
            Ok(instruction) => self.page(instruction, auth.0, req),
            Err(err) => Err(err.into_error_response()),
        };

        match result {
            Ok(page) => PageApiResponse::Ok(Json(page)),
            Err((_, json)) => PageApiResponse::InternalError(json),
        }
    }

    /// Create a product
    ///
    /// Validates the form, stores the product under the requesting user and
    /// redirects to the product list.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn store_product(
        &self,
        auth: SessionBearer,
        body: Json<ProductFormRequest>,
    ) -> StoreProductResponse {
        let fields = match validate(body.0) {
            Ok(fields) => fields,
            Err((_, json)) => return StoreProductResponse::UnprocessableEntity(json),
        };

        let params = StoreProductParams {
            owner: auth.0.id,
            fields,
        };

        match self.store_use_case.execute(params).await {
            Ok(redirect) => {
                StoreProductResponse::SeeOther(self.renderer.redirect_location(redirect))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => StoreProductResponse::UnprocessableEntity(json),
                    _ => StoreProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Show a product
    #[oai(path = "/products/:product", method = "get", tag = "ApiTags::Products")]
    async fn view_product(
        &self,
        auth: SessionBearer,
        product: Path<String>,
        req: &Request,
    ) -> ProductPageApiResponse {
        let result = match self.resolve(&product.0).await {
            Ok(product) => match self.view_use_case.execute(ViewProductParams { product }).await {
                Ok(instruction) => self.page(instruction, auth.0, req),
                Err(err) => Err(err.into_error_response()),
            },
            Err(e) => Err(e),
        };

        ProductPageApiResponse::from_result(result)
    }

    /// Show the edit form for a product
    #[oai(
        path = "/products/:product/edit",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn edit_product(
        &self,
        auth: SessionBearer,
        product: Path<String>,
        req: &Request,
    ) -> ProductPageApiResponse {
        let result = match self.resolve(&product.0).await {
            Ok(product) => match self.edit_use_case.execute(EditProductParams { product }).await {
                Ok(instruction) => self.page(instruction, auth.0, req),
                Err(err) => Err(err.into_error_response()),
            },
            Err(e) => Err(e),
        };

        ProductPageApiResponse::from_result(result)
    }

    /// Update a product
    ///
    /// Replaces every editable field and renders the edit page with the
    /// refreshed product.
    #[oai(path = "/products/:product", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: SessionBearer,
        product: Path<String>,
        body: Json<ProductFormRequest>,
        req: &Request,
    ) -> UpdateProductResponse {
        let product = match self.resolve(&product.0).await {
            Ok(product) => product,
            Err(e) => return UpdateProductResponse::from_error(e),
        };
        let fields = match validate(body.0) {
            Ok(fields) => fields,
            Err(e) => return UpdateProductResponse::from_error(e),
        };

        let result = match self
            .update_use_case
            .execute(UpdateProductParams { product, fields })
            .await
        {
            Ok(instruction) => self.page(instruction, auth.0, req),
            Err(err) => Err(err.into_error_response()),
        };

        match result {
            Ok(page) => UpdateProductResponse::Ok(Json(page)),
            Err(e) => UpdateProductResponse::from_error(e),
        }
    }

    /// Delete a product
    ///
    /// Permanently removes the product and redirects to the product list.
    #[oai(
        path = "/products/:product",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn destroy_product(
        &self,
        _auth: SessionBearer,
        product: Path<String>,
    ) -> DestroyProductResponse {
        let product = match self.resolve(&product.0).await {
            Ok(product) => product,
            Err(e) => return DestroyProductResponse::from_error(e),
        };

        match self
            .destroy_use_case
            .execute(DestroyProductParams { product })
            .await
        {
            Ok(redirect) => {
                DestroyProductResponse::SeeOther(self.renderer.redirect_location(redirect))
            }
            Err(err) => DestroyProductResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(ApiResponse)]
pub enum PageApiResponse {
    #[oai(status = 200)]
    Ok(Json<PageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProductPageApiResponse {
    #[oai(status = 200)]
    Ok(Json<PageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductPageApiResponse {
    fn from_result(result: Result<PageResponse, ApiError>) -> Self {
        match result {
            Ok(page) => Self::Ok(Json(page)),
            Err((status, json)) => match status.as_u16() {
                404 => Self::NotFound(json),
                _ => Self::InternalError(json),
            },
        }
    }
}

#[derive(ApiResponse)]
pub enum StoreProductResponse {
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<PageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UpdateProductResponse {
    fn from_error((status, json): ApiError) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(json),
            422 => Self::UnprocessableEntity(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DestroyProductResponse {
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DestroyProductResponse {
    fn from_error((status, json): ApiError) -> Self {
        match status.as_u16() {
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
