use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use poem_openapi::Object;
use serde::Serialize;
use serde_json::Value;

use business::domain::product::model::Product;
use business::domain::product::validation::ProductFieldsInput;
use business::domain::view::model::ViewPayload;

/// Product form submitted on create and update.
///
/// Fields are untyped at the transport level so that missing or wrongly typed
/// values surface as field-level validation errors instead of a parse failure.
#[derive(Debug, Clone, Default, Object)]
pub struct ProductFormRequest {
    /// Product name
    pub name: Option<Value>,
    /// Stock keeping unit, unique per catalog
    pub sku: Option<Value>,
    /// Product description
    pub description: Option<Value>,
    /// Unit price, as a number or numeric string
    pub price: Option<Value>,
    /// Units in stock, as an integer or integer string
    pub quantity: Option<Value>,
    /// Image path or URL
    pub image: Option<Value>,
}

impl From<ProductFormRequest> for ProductFieldsInput {
    fn from(request: ProductFormRequest) -> Self {
        Self {
            name: request.name,
            sku: request.sku,
            description: request.description,
            price: request.price,
            quantity: request.quantity,
            image: request.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Identifier of the user who created the product
    pub user_id: i64,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            user_id: product.user_id.value(),
            price: product.price.to_f64().unwrap_or_default(),
            name: product.name,
            sku: product.sku,
            description: product.description,
            quantity: product.quantity,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Per-view data for catalog pages: `products` on the index, `product` on
/// view and edit, nothing on the add form.
#[derive(Debug, Default, Serialize)]
pub struct ProductPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
}

impl From<ViewPayload> for ProductPageData {
    fn from(payload: ViewPayload) -> Self {
        match payload {
            ViewPayload::Empty => Self::default(),
            ViewPayload::Products(products) => Self {
                products: Some(products.into_iter().map(|p| p.into()).collect()),
                product: None,
            },
            ViewPayload::Product(product) => Self {
                products: None,
                product: Some(product.into()),
            },
        }
    }
}
