use tracing::{debug, info, instrument, warn};

use crate::domain::{
    authentication::{
        entities::LoginOutput,
        ports::{AuthService, SessionTokenRepository},
        value_objects::{Identity, LoginInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_analysis::ports::VisionClient,
    user::ports::UserRepository,
};

impl<U, H, S, V, HC> AuthService for Service<U, H, S, V, HC>
where
    U: UserRepository,
    H: HasherRepository,
    S: SessionTokenRepository,
    V: VisionClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input))]
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::MissingFields);
        }

        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .clone()
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(input.password, password_hash)
            .await?;
        if !valid {
            warn!(user_id = %user.id, "login rejected");
            return Err(CoreError::InvalidCredentials);
        }

        let session = self.session_repository.issue(&user)?;
        info!(user_id = %user.id, "session issued");

        Ok(LoginOutput { session, user })
    }

    async fn authenticate(&self, token: String) -> Option<Identity> {
        let claims = match self.session_repository.verify(&token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("session token rejected: {}", e);
                return None;
            }
        };

        Identity::try_from(claims)
            .map_err(|e| debug!("session subject is not a user id: {}", e))
            .ok()
    }
}
