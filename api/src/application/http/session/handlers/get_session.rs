use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        session::validators::SessionUser,
    },
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires: String,
}

#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    summary = "Current session",
    responses(
        (status = 200, body = SessionResponse),
        (status = 401, description = "Authentication required", body = ApiErrorResponse)
    ),
)]
pub async fn get_session(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SessionResponse>, ApiError> {
    let expires = identity
        .expires_at
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    Ok(Response::OK(SessionResponse {
        user: SessionUser::from(identity),
        expires,
    }))
}
