use utoipa::OpenApi;

use crate::application::http::{
    accounts::router::AccountsApiDoc, health::HealthApiDoc,
    meal_analysis::router::MealAnalysisApiDoc, session::router::SessionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SnapMeal API"
    ),
    nest(
        (path = "/api", api = MealAnalysisApiDoc),
        (path = "/api", api = AccountsApiDoc),
        (path = "/api/auth", api = SessionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
