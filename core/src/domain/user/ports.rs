use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{CreateUserRequest, ResetPasswordInput, SignupInput, SignupOutput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Fails with [`CoreError::UserExists`] when the email is already taken.
    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn signup(&self, input: SignupInput)
    -> impl Future<Output = Result<SignupOutput, CoreError>> + Send;

    fn reset_password(
        &self,
        identity: Identity,
        input: ResetPasswordInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
