use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::{ProductId, UserId};

pub const PRODUCT_COLUMNS: &str =
    "id, user_id, name, sku, description, price, quantity, image, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            UserId::new(self.user_id),
            self.name,
            self.sku,
            self.description,
            self.price,
            self.quantity,
            self.image,
            self.created_at,
            self.updated_at,
        )
    }
}
