//! Login Use Case
//!
//! Checks credentials and issues a session token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenService;
use crate::domain::entity::user::Dashboard;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Session token, for the cookie and the response body
    pub session_token: String,
    pub dashboard: Dashboard,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
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

    /// Unknown email, unparseable email and wrong password all end in
    /// `InvalidCredentials` after exactly one hash verification.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let password = RawPassword::for_login(input.password);

        let user = match Email::new(&input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let (user, password) = match (user, password) {
            (Some(user), Some(password)) => (user, password),
            (None, Some(password)) => {
                password.burn_verification(self.config.pepper());
                return Err(AuthError::InvalidCredentials);
            }
            (_, None) => return Err(AuthError::InvalidCredentials),
        };

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = self.tokens.issue_session(&user, Utc::now())?;

        tracing::info!(
            user_id = %user.user_id,
            is_admin = user.is_admin,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            dashboard: user.dashboard(),
        })
    }
}
