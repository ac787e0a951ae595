use axum::extract::State;
use serde::{Deserialize, Serialize};
use snapmeal_core::domain::user::ports::UserService;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    accounts::validators::SignupRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::{AppService, AppState},
    },
};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub ok: bool,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "accounts",
    summary = "Create an account",
    request_body = SignupRequest,
    responses(
        (status = 201, body = SignupResponse),
        (status = 400, description = "Missing fields", body = ApiErrorResponse),
        (status = 409, description = "User exists", body = ApiErrorResponse)
    ),
)]
pub async fn signup<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<SignupRequest>,
) -> Result<Response<SignupResponse>, ApiError> {
    let output = state
        .service
        .signup(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SignupResponse {
        ok: true,
        user_id: output.user_id,
    }))
}
