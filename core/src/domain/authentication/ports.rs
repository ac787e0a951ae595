use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{LoginOutput, SessionClaims, SessionToken},
        value_objects::{Identity, LoginInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

/// Issues and verifies signed session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait SessionTokenRepository: Send + Sync {
    fn issue(&self, user: &User) -> Result<SessionToken, CoreError>;

    /// Fails with [`CoreError::InvalidToken`] on a bad signature or an expired token.
    fn verify(&self, token: &str) -> Result<SessionClaims, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    /// Resolves a bearer token to the caller, or `None` when it does not verify.
    fn authenticate(&self, token: String) -> impl Future<Output = Option<Identity>> + Send;
}
