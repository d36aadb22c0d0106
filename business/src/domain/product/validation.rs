use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

use super::model::ProductFields;

pub const MAX_TEXT_LENGTH: usize = 255;
/// Largest price a `NUMERIC(10,2)` column holds, in cents.
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;
const PRICE_SCALE: i64 = 2;

/// Raw product form input, before validation.
///
/// Values stay untyped so that a wrongly typed field is reported as a field
/// error instead of rejecting the whole form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFieldsInput {
    pub name: Option<Value>,
    pub sku: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub quantity: Option<Value>,
    pub image: Option<Value>,
}

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("product.validation_failed")]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, code: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(code.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl ProductFields {
    /// Validates a complete product form.
    ///
    /// Every field is checked so the caller gets all failures at once.
    /// Text fields are trimmed; numeric fields accept JSON numbers or numeric
    /// strings; prices are rounded to cents.
    pub fn validate(input: ProductFieldsInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required_text(&mut errors, "name", input.name, Some(MAX_TEXT_LENGTH));
        let sku = required_text(&mut errors, "sku", input.sku, Some(MAX_TEXT_LENGTH));
        let description = required_text(&mut errors, "description", input.description, None);
        let price = price(&mut errors, input.price);
        let quantity = quantity(&mut errors, input.quantity);
        let image = required_text(&mut errors, "image", input.image, Some(MAX_TEXT_LENGTH));

        match (name, sku, description, price, quantity, image) {
            (Some(name), Some(sku), Some(description), Some(price), Some(quantity), Some(image))
                if errors.is_empty() =>
            {
                Ok(Self {
                    name,
                    sku,
                    description,
                    price,
                    quantity,
                    image,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Scalar form value with blanks and nulls folded into `Missing`.
enum Scalar {
    Missing,
    Number(serde_json::Number),
    Text(String),
    Other,
}

impl From<Option<Value>> for Scalar {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Scalar::Missing,
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Scalar::Missing
                } else {
                    Scalar::Text(trimmed.to_string())
                }
            }
            Some(Value::Number(n)) => Scalar::Number(n),
            Some(_) => Scalar::Other,
        }
    }
}

fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Value>,
    max_length: Option<usize>,
) -> Option<String> {
    let value = match Scalar::from(value) {
        Scalar::Text(v) => v,
        Scalar::Missing => {
            errors.add(field, "validation.required");
            return None;
        }
        Scalar::Number(_) | Scalar::Other => {
            errors.add(field, "validation.string");
            return None;
        }
    };

    if let Some(max) = max_length
        && value.chars().count() > max
    {
        errors.add(field, "validation.max_length");
        return None;
    }

    Some(value)
}

fn price(errors: &mut ValidationErrors, value: Option<Value>) -> Option<BigDecimal> {
    // Display of a JSON number yields the shortest representation that
    // round-trips, so 9.99 parses as exactly 9.99.
    let parsed = match Scalar::from(value) {
        Scalar::Missing => {
            errors.add("price", "validation.required");
            return None;
        }
        Scalar::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        Scalar::Text(s) => BigDecimal::from_str(&s).ok(),
        Scalar::Other => None,
    };
    let Some(decimal) = parsed else {
        errors.add("price", "validation.numeric");
        return None;
    };

    if decimal < BigDecimal::from(0) {
        errors.add("price", "validation.min");
        return None;
    }
    let rounded = decimal.round(PRICE_SCALE);
    if &rounded * BigDecimal::from(100) > BigDecimal::from(MAX_PRICE_CENTS) {
        errors.add("price", "validation.max");
        return None;
    }

    Some(rounded)
}

fn quantity(errors: &mut ValidationErrors, value: Option<Value>) -> Option<i32> {
    let parsed = match Scalar::from(value) {
        Scalar::Missing => {
            errors.add("quantity", "validation.required");
            return None;
        }
        Scalar::Number(n) => n.as_i64(),
        Scalar::Text(s) => s.parse::<i64>().ok(),
        Scalar::Other => None,
    };

    match parsed.and_then(|q| i32::try_from(q).ok()) {
        Some(q) => Some(q),
        None => {
            errors.add("quantity", "validation.integer");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn widget_input() -> ProductFieldsInput {
        ProductFieldsInput {
            name: Some(json!("Widget")),
            sku: Some(json!("W-100")),
            description: Some(json!("A widget")),
            price: Some(json!(9.99)),
            quantity: Some(json!(5)),
            image: Some(json!("widget.png")),
        }
    }

    #[test]
    fn should_accept_complete_form() {
        let fields = ProductFields::validate(widget_input()).unwrap();

        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.sku, "W-100");
        assert_eq!(fields.description, "A widget");
        assert_eq!(fields.price, BigDecimal::from_str("9.99").unwrap());
        assert_eq!(fields.quantity, 5);
        assert_eq!(fields.image, "widget.png");
    }

    #[test]
    fn should_report_every_missing_field() {
        let errors = ProductFields::validate(ProductFieldsInput::default()).unwrap_err();

        for field in ["name", "sku", "description", "price", "quantity", "image"] {
            assert_eq!(
                errors.get(field),
                Some(&["validation.required".to_string()][..]),
                "field {field}"
            );
        }
    }

    #[test]
    fn should_treat_null_as_missing() {
        let input = ProductFieldsInput {
            price: Some(Value::Null),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(
            errors.get("price"),
            Some(&["validation.required".to_string()][..])
        );
    }

    #[test]
    fn should_reject_blank_name() {
        let input = ProductFieldsInput {
            name: Some(json!("   ")),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert!(errors.get("name").is_some());
        assert!(errors.get("sku").is_none());
    }

    #[test]
    fn should_reject_text_field_when_not_a_string() {
        let input = ProductFieldsInput {
            name: Some(json!(42)),
            image: Some(json!(["a.png"])),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(errors.get("name"), Some(&["validation.string".to_string()][..]));
        assert_eq!(errors.get("image"), Some(&["validation.string".to_string()][..]));
    }

    #[test]
    fn should_trim_text_fields() {
        let input = ProductFieldsInput {
            sku: Some(json!("  W-100 ")),
            ..widget_input()
        };

        let fields = ProductFields::validate(input).unwrap();

        assert_eq!(fields.sku, "W-100");
    }

    #[test]
    fn should_reject_text_longer_than_limit() {
        let input = ProductFieldsInput {
            image: Some(json!("a".repeat(MAX_TEXT_LENGTH + 1))),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(
            errors.get("image"),
            Some(&["validation.max_length".to_string()][..])
        );
    }

    #[test]
    fn should_allow_long_description() {
        let input = ProductFieldsInput {
            description: Some(json!("d".repeat(MAX_TEXT_LENGTH * 4))),
            ..widget_input()
        };

        assert!(ProductFields::validate(input).is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        let input = ProductFieldsInput {
            price: Some(json!(-0.01)),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(errors.get("price"), Some(&["validation.min".to_string()][..]));
    }

    #[test]
    fn should_reject_price_when_not_numeric() {
        for value in [json!("abc"), json!(true), json!({"amount": 1})] {
            let input = ProductFieldsInput {
                price: Some(value.clone()),
                ..widget_input()
            };

            let errors = ProductFields::validate(input).unwrap_err();

            assert_eq!(
                errors.get("price"),
                Some(&["validation.numeric".to_string()][..]),
                "value {value}"
            );
        }
    }

    #[test]
    fn should_accept_price_given_as_numeric_string() {
        let input = ProductFieldsInput {
            price: Some(json!(" 9.99 ")),
            ..widget_input()
        };

        let fields = ProductFields::validate(input).unwrap();

        assert_eq!(fields.price, BigDecimal::from_str("9.99").unwrap());
    }

    #[test]
    fn should_reject_price_above_maximum() {
        let input = ProductFieldsInput {
            price: Some(json!(999_999_999.0)),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(errors.get("price"), Some(&["validation.max".to_string()][..]));
    }

    #[test]
    fn should_accept_price_at_maximum() {
        let input = ProductFieldsInput {
            price: Some(json!("99999999.99")),
            ..widget_input()
        };

        assert!(ProductFields::validate(input).is_ok());
    }

    #[test]
    fn should_round_price_to_cents() {
        let input = ProductFieldsInput {
            price: Some(json!(12.505)),
            ..widget_input()
        };

        let fields = ProductFields::validate(input).unwrap();

        let lower = BigDecimal::from_str("12.50").unwrap();
        let upper = BigDecimal::from_str("12.51").unwrap();
        assert!(fields.price == lower || fields.price == upper);
    }

    #[test]
    fn should_accept_negative_quantity() {
        let input = ProductFieldsInput {
            quantity: Some(json!(-2)),
            ..widget_input()
        };

        let fields = ProductFields::validate(input).unwrap();

        assert_eq!(fields.quantity, -2);
    }

    #[test]
    fn should_accept_quantity_given_as_integer_string() {
        let input = ProductFieldsInput {
            quantity: Some(json!("12")),
            ..widget_input()
        };

        let fields = ProductFields::validate(input).unwrap();

        assert_eq!(fields.quantity, 12);
    }

    #[test]
    fn should_reject_quantity_when_not_an_integer() {
        for value in [json!(5.5), json!("five"), json!("5.5"), json!(false)] {
            let input = ProductFieldsInput {
                quantity: Some(value.clone()),
                ..widget_input()
            };

            let errors = ProductFields::validate(input).unwrap_err();

            assert_eq!(
                errors.get("quantity"),
                Some(&["validation.integer".to_string()][..]),
                "value {value}"
            );
        }
    }

    #[test]
    fn should_reject_quantity_outside_integer_range() {
        let input = ProductFieldsInput {
            quantity: Some(json!(i64::from(i32::MAX) + 1)),
            ..widget_input()
        };

        let errors = ProductFields::validate(input).unwrap_err();

        assert_eq!(
            errors.get("quantity"),
            Some(&["validation.integer".to_string()][..])
        );
    }

    proptest! {
        #[test]
        fn should_accept_any_well_formed_form(
            name in "[A-Za-z][A-Za-z0-9 ]{0,60}",
            sku in "[A-Z]{1,4}-[0-9]{1,6}",
            description in "[A-Za-z][A-Za-z0-9 .,]{0,200}",
            cents in 0u32..9_999_999,
            quantity in any::<i32>(),
            image in "[a-z]{1,20}\\.(png|jpg)",
        ) {
            let price = f64::from(cents) / 100.0;
            let input = ProductFieldsInput {
                name: Some(json!(name)),
                sku: Some(json!(sku)),
                description: Some(json!(description)),
                price: Some(json!(price)),
                quantity: Some(json!(quantity)),
                image: Some(json!(image)),
            };

            let fields = ProductFields::validate(input).unwrap();

            prop_assert_eq!(fields.name, name.trim());
            prop_assert_eq!(fields.sku, sku);
            prop_assert_eq!(fields.description, description.trim());
            prop_assert_eq!(fields.price, BigDecimal::from(cents) / BigDecimal::from(100));
            prop_assert_eq!(fields.quantity, quantity);
            prop_assert_eq!(fields.image, image);
        }

        #[test]
        fn should_never_accept_missing_sku(quantity in any::<i32>()) {
            let input = ProductFieldsInput {
                sku: None,
                quantity: Some(json!(quantity)),
                ..widget_input()
            };

            let errors = ProductFields::validate(input).unwrap_err();

            prop_assert!(errors.get("sku").is_some());
        }
    }
}
