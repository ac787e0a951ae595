use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    reset_password::{__path_reset_password, reset_password},
    signup::{__path_signup, signup},
};
use crate::application::{
    auth::auth,
    http::server::app_state::{AppService, AppState},
};

#[derive(OpenApi)]
#[openapi(paths(signup, reset_password))]
pub struct AccountsApiDoc;

pub fn accounts_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    Router::new()
        .route(
            &format!("{}/api/signup", state.args.server.root_path),
            post(signup::<S>),
        )
        .route(
            &format!("{}/api/reset-password", state.args.server.root_path),
            post(reset_password::<S>),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth::<S>))
}
