//! SMTP Mailer Adapter

use platform::mail::SmtpMailer;

use crate::domain::mailer::{Mailer, OutgoingMail};
use crate::error::AuthResult;

impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> AuthResult<()> {
        SmtpMailer::send(self, mail).await?;
        Ok(())
    }
}
