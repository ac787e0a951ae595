use crate::domain::{
    authentication::ports::SessionTokenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    meal_analysis::ports::VisionClient,
    user::ports::UserRepository,
};

impl<U, H, S, V, HC> HealthCheckService for Service<U, H, S, V, HC>
where
    U: UserRepository,
    H: HasherRepository,
    S: SessionTokenRepository,
    V: VisionClient,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
