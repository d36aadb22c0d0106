use super::{auth_config::AuthConfig, cors_config, routing_config, server_config::ServerConfig};
use business::domain::routing::model::RoutingConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub routing: RoutingConfig,
    pub asset_version: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            routing: routing_config::init_routing()?,
            asset_version: routing_config::asset_version(),
        })
    }
}
