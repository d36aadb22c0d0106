use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

/// The authenticated actor issuing catalog requests.
///
/// Users are managed by the surrounding application; the catalog only reads
/// them to attribute product ownership and to fill the page `auth` props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        email_verified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            email_verified_at,
        }
    }
}
