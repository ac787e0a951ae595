use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use snapmeal_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use thiserror::Error;
use tracing::debug;

use super::http::server::{
    api_entities::api_error::ApiError,
    app_state::{AppService, AppState},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid token")]
    InvalidToken,
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    let token = bearer.token();
    if token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(token.to_string())
}

/// Resolves the bearer token, when one is present, into an [`Identity`]
/// request extension. Never rejects: handlers that need a caller use
/// [`RequiredIdentity`].
pub async fn auth<S: AppService>(
    State(state): State<AppState<S>>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();

    match extract_token_from_bearer(&mut parts).await {
        Ok(token) => {
            if let Some(identity) = state.service.authenticate(token).await {
                parts.extensions.insert(identity);
            }
        }
        Err(e) => debug!("request without session: {}", e),
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extractor for handlers that only serve signed-in users.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
