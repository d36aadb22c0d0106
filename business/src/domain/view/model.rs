use crate::domain::product::model::Product;
use crate::domain::routing::model::RouteName;

/// Client view components rendered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewName {
    ProductsIndex,
    ProductView,
    ProductEdit,
    ProductAdd,
}

impl ViewName {
    /// Component path resolved by the client; `{product}` is a literal folder name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::ProductsIndex => "Products/Index",
            ViewName::ProductView => "Products/{product}/View",
            ViewName::ProductEdit => "Products/{product}/Edit",
            ViewName::ProductAdd => "Products/Add",
        }
    }
}

impl std::fmt::Display for ViewName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewPayload {
    Empty,
    Products(Vec<Product>),
    Product(Product),
}

/// Directs the view layer to display a component with a data payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction {
    pub view: ViewName,
    pub payload: ViewPayload,
}

impl RenderInstruction {
    pub fn new(view: ViewName, payload: ViewPayload) -> Self {
        Self { view, payload }
    }
}

/// Directs the caller to a named route instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectInstruction {
    pub route: RouteName,
}

impl RedirectInstruction {
    pub fn to(route: RouteName) -> Self {
        Self { route }
    }
}
