use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    analyze_meal::{__path_analyze_meal, analyze_meal},
    health_check::{__path_analyze_meal_status, analyze_meal_status},
};
use crate::application::{
    auth::auth,
    http::server::app_state::{AppService, AppState},
};

#[derive(OpenApi)]
#[openapi(paths(analyze_meal, analyze_meal_status))]
pub struct MealAnalysisApiDoc;

pub fn meal_analysis_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    Router::new()
        .route(
            &format!("{}/api/analyze-meal", state.args.server.root_path),
            get(analyze_meal_status).post(analyze_meal::<S>),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth::<S>))
}
