use axum::extract::State;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use snapmeal_core::domain::authentication::ports::AuthService;
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::{AppService, AppState},
    },
    session::validators::{LoginRequest, SessionUser},
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub expires: String,
    pub user: SessionUser,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "session",
    summary = "Sign in with email and password",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponse),
        (status = 400, description = "Missing fields", body = ApiErrorResponse),
        (status = 401, description = "Invalid credentials", body = ApiErrorResponse)
    ),
)]
pub async fn login<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<LoginRequest>,
) -> Result<Response<LoginResponse>, ApiError> {
    let output = state
        .service
        .login(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        token: output.session.token,
        expires: output
            .session
            .expires_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        user: SessionUser::from(&output.user),
    }))
}
