use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::authentication::entities::SessionClaims;

/// The authenticated caller, resolved from a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

impl TryFrom<SessionClaims> for Identity {
    type Error = uuid::Error;

    fn try_from(claims: SessionClaims) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: Uuid::parse_str(&claims.sub)?,
            email: claims.email,
            name: claims.name,
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}
