use serde::{Deserialize, Serialize};

/// Customer record shared with the client views.
///
/// The catalog exposes no operations on customers; the shape lives here so
/// every page rendering it agrees on the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_customer_through_json_contract() {
        let raw = serde_json::json!({
            "id": 11,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701"
        });

        let customer: Customer = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(customer.city, "Springfield");
        assert_eq!(serde_json::to_value(&customer).unwrap(), raw);
    }

    #[test]
    fn should_reject_customer_when_field_missing() {
        let raw = serde_json::json!({ "id": 1, "name": "No Contact" });

        let result = serde_json::from_value::<Customer>(raw);

        assert!(result.is_err());
    }
}
