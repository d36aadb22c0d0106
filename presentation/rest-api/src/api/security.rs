use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::{SecurityScheme, auth::Bearer};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

use crate::config::auth_config::AuthConfig;

/// Claims carried by session tokens issued by the surrounding application.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    pub exp: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("auth.invalid_subject")]
    InvalidSubject,
}

/// Verifies a session token and returns the user it was issued for.
pub fn authenticate(token: &str, config: &AuthConfig) -> Result<User, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;
    let claims = token_data.claims;

    let id = claims
        .sub
        .parse::<UserId>()
        .map_err(|_| AuthError::InvalidSubject)?;

    Ok(User::new(id, claims.name, claims.email, claims.email_verified_at))
}

/// Session bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_bearer_checker")]
pub struct SessionBearer(pub User);

async fn session_bearer_checker(req: &Request, bearer: Bearer) -> Option<User> {
    let Some(config) = req.data::<AuthConfig>() else {
        tracing::error!("Auth config missing from request data");
        return None;
    };

    match authenticate(&bearer.token, config) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Session auth failed: {e}");
            None
        }
    }
}
