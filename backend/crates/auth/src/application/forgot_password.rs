//! Forgot Password Use Case
//!
//! Mails a reset link to a registered address.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenService;
use crate::domain::mailer::{Mailer, OutgoingMail};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Subject of the reset mail
pub const RESET_MAIL_SUBJECT: &str = "Reset Password";

/// What happened to a forgot-password request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    /// No account for that email; nothing was sent
    UserNotFound,
    /// Reset link handed to the mail relay
    MailSent,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<R, M>
where
    R: UserRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R, M> ForgotPasswordUseCase<R, M>
where
    R: UserRepository,
    M: Mailer,
{
    pub fn new(
        repo: Arc<R>,
        mailer: Arc<M>,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            repo,
            mailer,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, email: &str) -> AuthResult<ForgotPasswordOutcome> {
        let Ok(email) = Email::new(email) else {
            return Ok(ForgotPasswordOutcome::UserNotFound);
        };

        let Some(user) = self.repo.find_by_email(&email).await? else {
            return Ok(ForgotPasswordOutcome::UserNotFound);
        };

        let token = self.tokens.issue_reset(&user.user_id, Utc::now())?;

        self.mailer
            .send(OutgoingMail {
                to: user.email.to_string(),
                subject: RESET_MAIL_SUBJECT.to_string(),
                body: self.config.reset_link(&user.user_id, &token),
            })
            .await?;

        tracing::info!(user_id = %user.user_id, "Password reset mail sent");

        Ok(ForgotPasswordOutcome::MailSent)
    }
}
