use tracing::info;

use crate::{
    domain::common::{SnapMealConfig, services::Service},
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::OpenAIVisionClient,
        session::JwtSessionRepository,
        user::PostgresUserRepository,
    },
};

pub type SnapMealService = Service<
    PostgresUserRepository,
    Argon2HasherRepository,
    JwtSessionRepository,
    OpenAIVisionClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: SnapMealConfig) -> Result<SnapMealService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let user = PostgresUserRepository::new(postgres.get_db());
    let hasher = Argon2HasherRepository::new();
    let session = JwtSessionRepository::new(&config.session);
    let vision = OpenAIVisionClient::new(&config.llm)?;
    let health = PostgresHealthCheckRepository::new(postgres.get_db());

    info!(model = %config.llm.openai_model, "snapmeal service initialized");

    Ok(Service::new(user, hasher, session, vision, health))
}
