use axum::{body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use snapmeal_core::domain::user::{ports::UserService, value_objects::ResetPasswordInput};
use tracing::error;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        accounts::validators::ResetPasswordRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::{AppService, AppState},
        },
    },
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordResponse {
    pub ok: bool,
}

#[utoipa::path(
    post,
    path = "/reset-password",
    tag = "accounts",
    summary = "Change the caller's password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, body = ResetPasswordResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, description = "Authentication required", body = ApiErrorResponse),
        (status = 403, description = "Current password is incorrect", body = ApiErrorResponse),
        (status = 404, description = "User not found", body = ApiErrorResponse)
    ),
)]
pub async fn reset_password<S: AppService>(
    State(state): State<AppState<S>>,
    RequiredIdentity(identity): RequiredIdentity,
    body: Bytes,
) -> Result<Response<ResetPasswordResponse>, ApiError> {
    let request: ResetPasswordRequest = serde_json::from_slice(&body).unwrap_or_default();
    let input = ResetPasswordInput::try_from(request).map_err(ApiError::from)?;

    state
        .service
        .reset_password(identity, input)
        .await
        .map_err(|e| {
            error!("Password reset failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(ResetPasswordResponse { ok: true }))
}
