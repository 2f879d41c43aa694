//! Reset Password Use Case
//!
//! Replaces the password of the user a reset token was issued for.
//!
//! Tokens are not consumed: a token stays usable until it expires.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    /// `:id` path segment
    pub user_id: String,
    /// `:token` path segment
    pub token: String,
    pub password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        let user_id: UserId = input
            .user_id
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        self.tokens.verify_reset(&input.token, &user_id)?;

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // Account removed after the token was issued
        if !self.repo.update_password(&user_id, &password_hash).await? {
            return Err(AuthError::InvalidToken);
        }

        tracing::info!(user_id = %user_id, "Password reset");

        Ok(())
    }
}
