use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealAnalysisStatusResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/analyze-meal",
    tag = "meal-analysis",
    summary = "Meal analysis liveness",
    responses(
        (status = 200, body = MealAnalysisStatusResponse)
    ),
)]
pub async fn analyze_meal_status() -> Response<MealAnalysisStatusResponse> {
    Response::OK(MealAnalysisStatusResponse {
        status: "ok".to_string(),
        message: "Meal analysis API is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
