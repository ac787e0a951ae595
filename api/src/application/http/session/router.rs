use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_session::{__path_get_session, get_session},
    login::{__path_login, login},
};
use crate::application::{
    auth::auth,
    http::server::app_state::{AppService, AppState},
};

#[derive(OpenApi)]
#[openapi(paths(login, get_session))]
pub struct SessionApiDoc;

pub fn session_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    Router::new()
        .route(
            &format!("{}/api/auth/login", state.args.server.root_path),
            post(login::<S>),
        )
        .route(
            &format!("{}/api/auth/session", state.args.server.root_path),
            get(get_session),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth::<S>))
}
