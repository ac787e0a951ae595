use chrono::{Duration, SubsecRound, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    authentication::{
        entities::{SessionClaims, SessionToken},
        ports::SessionTokenRepository,
    },
    common::{SessionConfig, entities::app_errors::CoreError},
    user::entities::User,
};

/// HS256-signed session tokens.
#[derive(Clone)]
pub struct JwtSessionRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessionRepository {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::hours(config.ttl_hours),
        }
    }
}

impl SessionTokenRepository for JwtSessionRepository {
    fn issue(&self, user: &User) -> Result<SessionToken, CoreError> {
        // JWT timestamps carry whole seconds only.
        let issued_at = Utc::now().trunc_subsecs(0);
        let expires_at = issued_at + self.ttl;
        let claims = SessionClaims::for_user(user, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                error!("Failed to sign session token: {}", e);
                CoreError::InternalServerError
            },
        )?;

        Ok(SessionToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Session token verification failed: {}", e);
                CoreError::InvalidToken
            })
    }
}
