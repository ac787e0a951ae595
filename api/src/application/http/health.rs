use axum::{Router, extract::State, routing::get};
use snapmeal_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;
use utoipa::OpenApi;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::{AppService, AppState},
};

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Database round-trip latency in milliseconds",
    responses(
        (status = 200, body = u64),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn health_live<S: AppService>(
    State(state): State<AppState<S>>,
) -> Result<Response<u64>, ApiError> {
    let latency = state.service.health().await.map_err(|e| {
        warn!("liveness probe failed: {}", e);
        ApiError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Response::OK(latency))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness of the database",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn health_ready<S: AppService>(
    State(state): State<AppState<S>>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(|e| {
        warn!("readiness probe failed: {}", e);
        ApiError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Response::OK(status))
}

pub fn health_routes<S: AppService>(root_path: &str) -> Router<AppState<S>> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live::<S>))
        .route(&format!("{}/health/ready", root_path), get(health_ready::<S>))
}
