use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub user_id: UserId,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The replaceable part of a product: everything but identity, owner and timestamps.
///
/// Built by `ProductFields::validate`; store and update always receive the
/// complete set, so an update is a full overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub image: String,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        user_id: UserId,
        name: String,
        sku: String,
        description: String,
        price: BigDecimal,
        quantity: i32,
        image: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            sku,
            description,
            price,
            quantity,
            image,
            created_at,
            updated_at,
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            sku: self.sku.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            quantity: self.quantity,
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn widget() -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::new(1),
            UserId::new(10),
            "Widget".to_string(),
            "W-100".to_string(),
            "A widget".to_string(),
            BigDecimal::from_str("9.99").unwrap(),
            5,
            "widget.png".to_string(),
            now,
            now,
        )
    }

    #[test]
    fn should_expose_replaceable_fields() {
        let fields = widget().fields();

        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.sku, "W-100");
        assert_eq!(fields.description, "A widget");
        assert_eq!(fields.price, BigDecimal::from_str("9.99").unwrap());
        assert_eq!(fields.quantity, 5);
        assert_eq!(fields.image, "widget.png");
    }
}
