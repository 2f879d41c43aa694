//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::error::app_error::AppError;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub mono: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let email = Email::new(&input.email)?;
        let user_name = UserName::new(&input.user_name).map_err(AppError::from)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let mono = input
            .mono
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let user = User::new(user_name, email, mono, password_hash);

        // The unique index catches a concurrent registration the lookup missed
        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(user)
    }
}
