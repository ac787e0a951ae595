use axum::{body::Bytes, extract::State};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use snapmeal_core::domain::meal_analysis::{MealAnalysis, MealAnalysisService};
use tracing::error;
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal_analysis::validators::AnalyzeMealRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::{AppService, AppState},
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMealResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub analysis: MealAnalysis,
    /// ISO-8601, millisecond precision.
    pub timestamp: String,
}

#[utoipa::path(
    post,
    path = "/analyze-meal",
    tag = "meal-analysis",
    summary = "Analyze a meal photo",
    description = "Sends the photo to the vision model and returns nutrition facts, allergens and delivery suggestions. Requires a session.",
    request_body = AnalyzeMealRequest,
    responses(
        (status = 200, body = AnalyzeMealResponse),
        (status = 400, description = "Image data is required", body = ApiErrorResponse),
        (status = 401, description = "Authentication required", body = ApiErrorResponse),
        (status = 429, description = "Upstream quota exhausted", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_meal<S: AppService>(
    State(state): State<AppState<S>>,
    RequiredIdentity(identity): RequiredIdentity,
    body: Bytes,
) -> Result<Response<AnalyzeMealResponse>, ApiError> {
    let request: AnalyzeMealRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to read analyze-meal request body: {}", e);
        ApiError::InternalServerError(e.to_string())
    })?;

    let meal = state
        .service
        .analyze_meal(identity, request.into())
        .await
        .map_err(|e| {
            error!("Meal analysis failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(AnalyzeMealResponse {
        success: true,
        analysis: meal.analysis,
        timestamp: meal.analyzed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
