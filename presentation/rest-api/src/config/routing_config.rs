use std::env;

use anyhow::Context;
use business::domain::routing::model::RoutingConfig;

const DEFAULT_APP_URL: &str = "http://localhost:8080";

/// Build the route table exported to client views
///
/// Environment variables:
/// - APP_URL: Public base URL of the application (default: "http://localhost:8080")
pub fn init_routing() -> anyhow::Result<RoutingConfig> {
    let app_url = env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string());
    RoutingConfig::new(&app_url).with_context(|| format!("APP_URL is not a valid URL: {app_url}"))
}

/// Asset version echoed on every page so clients can detect stale bundles
///
/// Environment variables:
/// - ASSET_VERSION: Optional build identifier
pub fn asset_version() -> Option<String> {
    env::var("ASSET_VERSION")
        .ok()
        .filter(|version| !version.trim().is_empty())
}
