use std::sync::Arc;

use snapmeal_core::domain::{
    authentication::ports::AuthService, health::ports::HealthCheckService,
    meal_analysis::ports::MealAnalysisService, user::ports::UserService,
};

use crate::args::Args;

/// Everything the HTTP layer asks of the core.
pub trait AppService:
    MealAnalysisService + UserService + AuthService + HealthCheckService + 'static
{
}

impl<T> AppService for T where
    T: MealAnalysisService + UserService + AuthService + HealthCheckService + 'static
{
}

pub struct AppState<S> {
    pub args: Arc<Args>,
    pub service: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            args: self.args.clone(),
            service: self.service.clone(),
        }
    }
}

impl<S: AppService> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
