use anyhow::{Context, bail};

/// Secret used to verify session bearer tokens issued by the surrounding application.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_JWT_SECRET: HS256 signing secret (required, non-empty)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret =
            std::env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET must be set")?;
        if jwt_secret.trim().is_empty() {
            bail!("AUTH_JWT_SECRET must not be empty");
        }
        Ok(Self { jwt_secret })
    }
}
