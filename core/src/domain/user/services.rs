use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{ports::SessionTokenRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    meal_analysis::ports::VisionClient,
    user::{
        ports::{UserRepository, UserService},
        value_objects::{
            CreateUserRequest, MIN_PASSWORD_LENGTH, ResetPasswordInput, SignupInput, SignupOutput,
        },
    },
};

impl<U, H, S, V, HC> UserService for Service<U, H, S, V, HC>
where
    U: UserRepository,
    H: HasherRepository,
    S: SessionTokenRepository,
    V: VisionClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input))]
    async fn signup(&self, input: SignupInput) -> Result<SignupOutput, CoreError> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(CoreError::MissingFields);
        }

        if self
            .user_repository
            .get_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::UserExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(CreateUserRequest {
                email: input.email,
                name: input.name,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "user signed up");

        Ok(SignupOutput { user_id: user.id })
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn reset_password(
        &self,
        identity: Identity,
        input: ResetPasswordInput,
    ) -> Result<(), CoreError> {
        if input.current_password.is_empty() || input.new_password.is_empty() {
            return Err(CoreError::MissingFields);
        }

        if input.new_password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::PasswordTooShort);
        }

        let user = self
            .user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let current_hash = user.password_hash.ok_or(CoreError::NoPasswordSet)?;

        let valid = self
            .hasher_repository
            .verify_password(input.current_password, current_hash)
            .await?;
        if !valid {
            warn!("password reset rejected: current password mismatch");
            return Err(CoreError::InvalidPassword);
        }

        let new_hash = self
            .hasher_repository
            .hash_password(input.new_password)
            .await?;

        self.user_repository
            .update_password(user.id, new_hash)
            .await?;

        info!("password updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{
        authentication::ports::MockSessionTokenRepository,
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        meal_analysis::ports::MockVisionClient,
        user::{entities::User, ports::MockUserRepository},
    };

    type TestService = Service<
        MockUserRepository,
        MockHasherRepository,
        MockSessionTokenRepository,
        MockVisionClient,
        MockHealthCheckRepository,
    >;

    fn service(users: MockUserRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            users,
            hasher,
            MockSessionTokenRepository::new(),
            MockVisionClient::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn identity_for(user: &User) -> Identity {
        Identity {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    fn stored_user(hash: Option<&str>) -> User {
        User::new(
            "ada@example.com".to_string(),
            Some("Ada".to_string()),
            hash.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn signup_requires_email_and_password() {
        let service = service(MockUserRepository::new(), MockHasherRepository::new());

        let result = service
            .signup(SignupInput {
                email: "ada@example.com".to_string(),
                password: String::new(),
                name: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::MissingFields));
    }

    #[tokio::test]
    async fn signup_rejects_existing_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_user(Some("hash")))) }));

        let service = service(users, MockHasherRepository::new());

        let result = service
            .signup(SignupInput {
                email: "ada@example.com".to_string(),
                password: "secret123".to_string(),
                name: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::UserExists));
    }

    #[tokio::test]
    async fn signup_hashes_password_before_persisting() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        users
            .expect_create_user()
            .withf(|request| request.password_hash == "hashed:secret123")
            .returning(|request| {
                Box::pin(async move {
                    Ok(User::new(
                        request.email,
                        request.name,
                        Some(request.password_hash),
                    ))
                })
            });

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|password| Box::pin(async move { Ok(format!("hashed:{password}")) }));

        let service = service(users, hasher);

        let output = service
            .signup(SignupInput {
                email: "ada@example.com".to_string(),
                password: "secret123".to_string(),
                name: Some("Ada".to_string()),
            })
            .await
            .expect("signup should succeed");

        assert!(!output.user_id.is_nil());
    }

    #[tokio::test]
    async fn reset_password_enforces_minimum_length() {
        let user = stored_user(Some("hash"));
        let service = service(MockUserRepository::new(), MockHasherRepository::new());

        let result = service
            .reset_password(
                identity_for(&user),
                ResetPasswordInput {
                    current_password: "oldpass".to_string(),
                    new_password: "12345".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::PasswordTooShort));
    }

    #[tokio::test]
    async fn reset_password_length_counts_utf16_units() {
        let user = stored_user(Some("hash"));
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new());

        // Three astral-plane characters are six UTF-16 code units.
        let result = service
            .reset_password(
                identity_for(&user),
                ResetPasswordInput {
                    current_password: "oldpass".to_string(),
                    new_password: "🍕🍕🍕".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::UserNotFound));
    }

    #[tokio::test]
    async fn reset_password_requires_both_fields() {
        let user = stored_user(Some("hash"));
        let service = service(MockUserRepository::new(), MockHasherRepository::new());

        let result = service
            .reset_password(
                identity_for(&user),
                ResetPasswordInput {
                    current_password: String::new(),
                    new_password: "newpass1".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::MissingFields));
    }

    #[tokio::test]
    async fn reset_password_fails_for_unknown_user() {
        let user = stored_user(Some("hash"));
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new());

        let result = service
            .reset_password(
                identity_for(&user),
                ResetPasswordInput {
                    current_password: "oldpass".to_string(),
                    new_password: "newpass1".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::UserNotFound));
    }

    #[tokio::test]
    async fn reset_password_fails_without_stored_hash() {
        let user = stored_user(None);
        let identity = identity_for(&user);
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let service = service(users, MockHasherRepository::new());

        let result = service
            .reset_password(
                identity,
                ResetPasswordInput {
                    current_password: "oldpass".to_string(),
                    new_password: "newpass1".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NoPasswordSet));
    }

    #[tokio::test]
    async fn reset_password_rejects_wrong_current_password() {
        let user = stored_user(Some("hash"));
        let identity = identity_for(&user);
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        users.expect_update_password().never();

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(users, hasher);

        let result = service
            .reset_password(
                identity,
                ResetPasswordInput {
                    current_password: "wrong".to_string(),
                    new_password: "newpass1".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::InvalidPassword));
    }

    #[tokio::test]
    async fn reset_password_stores_new_hash() {
        let user = stored_user(Some("hash"));
        let user_id = user.id;
        let identity = identity_for(&user);
        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        users
            .expect_update_password()
            .withf(move |id, hash| *id == user_id && hash == "hashed:newpass1")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        hasher
            .expect_hash_password()
            .returning(|password| Box::pin(async move { Ok(format!("hashed:{password}")) }));

        let service = service(users, hasher);

        let result = service
            .reset_password(
                identity,
                ResetPasswordInput {
                    current_password: "oldpass".to_string(),
                    new_password: "newpass1".to_string(),
                },
            )
            .await;

        assert_eq!(result, Ok(()));
    }
}
