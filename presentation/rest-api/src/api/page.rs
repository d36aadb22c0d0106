use poem_openapi::Object;
use serde::Serialize;

use business::domain::page::model::PageProps;
use business::domain::routing::model::RoutingConfig;
use business::domain::user::model::User;
use business::domain::view::model::{RedirectInstruction, ViewName};

/// Page object consumed by the client-side router.
#[derive(Debug, Clone, Object)]
pub struct PageResponse {
    /// Client component to render
    pub component: String,
    /// Per-view data merged with `auth` and `ziggy`
    pub props: serde_json::Value,
    /// URL the page was rendered for
    pub url: String,
    /// Asset version, when configured
    #[oai(skip_serializing_if_is_none)]
    pub version: Option<String>,
}

/// Turns render and redirect instructions into HTTP-level outcomes.
pub struct PageRenderer {
    routing: RoutingConfig,
    version: Option<String>,
}

impl PageRenderer {
    pub fn new(routing: RoutingConfig, version: Option<String>) -> Self {
        Self { routing, version }
    }

    pub fn render<T: Serialize>(
        &self,
        view: ViewName,
        data: T,
        user: User,
        url: &str,
    ) -> Result<PageResponse, serde_json::Error> {
        let path = url.split('?').next().unwrap_or(url);
        let props = PageProps::new(data, user, self.routing.with_location(path));

        Ok(PageResponse {
            component: view.as_str().to_string(),
            props: serde_json::to_value(&props)?,
            url: url.to_string(),
            version: self.version.clone(),
        })
    }

    pub fn redirect_location(&self, redirect: RedirectInstruction) -> String {
        redirect.route.path(&[])
    }
}
