use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use super::errors::RoutingError;

/// Named routes of the catalog, as known to the client-side route helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    ProductsIndex,
    ProductsAdd,
    ProductsStore,
    ProductsView,
    ProductsEdit,
    ProductsUpdate,
    ProductsDestroy,
}

impl RouteName {
    pub const ALL: [RouteName; 7] = [
        RouteName::ProductsIndex,
        RouteName::ProductsAdd,
        RouteName::ProductsStore,
        RouteName::ProductsView,
        RouteName::ProductsEdit,
        RouteName::ProductsUpdate,
        RouteName::ProductsDestroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::ProductsIndex => "products.index",
            RouteName::ProductsAdd => "products.add",
            RouteName::ProductsStore => "products.store",
            RouteName::ProductsView => "products.view",
            RouteName::ProductsEdit => "products.edit",
            RouteName::ProductsUpdate => "products.update",
            RouteName::ProductsDestroy => "products.destroy",
        }
    }

    /// URI template without the leading slash; parameters use `{name}` segments.
    pub fn uri(&self) -> &'static str {
        match self {
            RouteName::ProductsIndex | RouteName::ProductsStore => "products",
            RouteName::ProductsAdd => "products/add",
            RouteName::ProductsView | RouteName::ProductsUpdate | RouteName::ProductsDestroy => {
                "products/{product}"
            }
            RouteName::ProductsEdit => "products/{product}/edit",
        }
    }

    pub fn methods(&self) -> &'static [&'static str] {
        match self {
            RouteName::ProductsIndex
            | RouteName::ProductsAdd
            | RouteName::ProductsView
            | RouteName::ProductsEdit => &["GET", "HEAD"],
            RouteName::ProductsStore => &["POST"],
            RouteName::ProductsUpdate => &["PUT"],
            RouteName::ProductsDestroy => &["DELETE"],
        }
    }

    pub fn parameters(&self) -> Vec<String> {
        self.uri()
            .split('/')
            .filter_map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .map(str::to_string)
            })
            .collect()
    }

    /// Absolute path for the route, with each parameter replaced by its value.
    pub fn path(&self, params: &[(&str, String)]) -> String {
        let mut path = format!("/{}", self.uri());
        for (name, value) in params {
            path = path.replace(&format!("{{{}}}", name), value);
        }
        path
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDefinition {
    pub uri: String,
    pub methods: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl From<RouteName> for RouteDefinition {
    fn from(route: RouteName) -> Self {
        Self {
            uri: route.uri().to_string(),
            methods: route.methods().iter().map(|m| m.to_string()).collect(),
            parameters: route.parameters(),
        }
    }
}

/// Routing configuration exported to the client views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingConfig {
    pub url: String,
    pub port: Option<u16>,
    pub defaults: BTreeMap<String, String>,
    pub routes: BTreeMap<String, RouteDefinition>,
}

impl RoutingConfig {
    pub fn new(app_url: &str) -> Result<Self, RoutingError> {
        let parsed = Url::parse(app_url)?;
        if parsed.cannot_be_a_base() {
            return Err(RoutingError::AppUrlNotBase);
        }

        let routes = RouteName::ALL
            .into_iter()
            .map(|route| (route.as_str().to_string(), RouteDefinition::from(route)))
            .collect();

        Ok(Self {
            url: parsed.as_str().trim_end_matches('/').to_string(),
            port: parsed.port(),
            defaults: BTreeMap::new(),
            routes,
        })
    }

    /// Binds the configuration to the location of the current request.
    pub fn with_location(&self, path: &str) -> ZiggyProps {
        ZiggyProps {
            config: self.clone(),
            location: format!("{}{}", self.url, path),
        }
    }
}

/// Routing configuration plus the current location, as the `ziggy` page prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZiggyProps {
    #[serde(flatten)]
    pub config: RoutingConfig,
    pub location: String,
}
