use serde::Serialize;

use crate::domain::routing::model::ZiggyProps;
use crate::domain::user::model::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthProps {
    pub user: User,
}

/// Props delivered to every rendered view.
///
/// The per-view `data` is flattened next to the fixed `auth` and `ziggy`
/// entries, so a view declaring `PageProps<{ products: Product[] }>` reads
/// `props.products`, `props.auth.user` and `props.ziggy.location` directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProps<T> {
    #[serde(flatten)]
    pub data: T,
    pub auth: AuthProps,
    pub ziggy: ZiggyProps,
}

impl<T: Serialize> PageProps<T> {
    pub fn new(data: T, user: User, ziggy: ZiggyProps) -> Self {
        Self {
            data,
            auth: AuthProps { user },
            ziggy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing::model::RoutingConfig;
    use crate::domain::shared::value_objects::UserId;

    #[derive(Serialize)]
    struct ProductsPage {
        products: Vec<String>,
    }

    #[derive(Serialize)]
    struct EmptyPage {}

    fn test_user() -> User {
        User::new(UserId::new(1), "Ada", "ada@example.com", None)
    }

    #[test]
    fn should_merge_view_data_with_auth_and_ziggy() {
        let ziggy = RoutingConfig::new("http://localhost:8080")
            .unwrap()
            .with_location("/products");
        let props = PageProps::new(
            ProductsPage {
                products: vec!["Widget".to_string()],
            },
            test_user(),
            ziggy,
        );

        let json = serde_json::to_value(&props).unwrap();

        assert_eq!(json["products"][0], "Widget");
        assert_eq!(json["auth"]["user"]["email"], "ada@example.com");
        assert_eq!(json["ziggy"]["location"], "http://localhost:8080/products");
    }

    #[test]
    fn should_only_carry_fixed_fields_when_view_data_empty() {
        let ziggy = RoutingConfig::new("http://localhost:8080")
            .unwrap()
            .with_location("/products/add");
        let props = PageProps::new(EmptyPage {}, test_user(), ziggy);

        let json = serde_json::to_value(&props).unwrap();
        let mut keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        keys.sort();

        assert_eq!(keys, vec!["auth", "ziggy"]);
    }
}
