//! Outgoing Mail
//!
//! Plain-text mail through an authenticated SMTP relay (implicit TLS).

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// SMTP relay settings
#[derive(Clone)]
pub struct SmtpConfig {
    /// Relay host, e.g. `smtp.gmail.com`
    pub host: String,
    pub username: String,
    pub password: String,
    /// Sender address; usually the relay account itself
    pub from: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("from", &self.from)
            .finish()
    }
}

/// Parse an address the way the transport does before sending.
fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::InvalidAddress(e.to_string()))
}

/// Check that `address` can be used as a recipient.
///
/// Anything stored as a login email must pass this, otherwise the account
/// could never be sent a reset link.
pub fn check_recipient(address: &str) -> Result<(), MailError> {
    parse_mailbox(address).map(|_| ())
}

/// One plain-text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    fn into_message(self, from: &Mailbox) -> Result<Message, MailError> {
        let to = parse_mailbox(&self.to)?;

        Message::builder()
            .from(from.clone())
            .to(to)
            .subject(self.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(self.body)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

/// Async SMTP sender
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a pooled transport. No connection is opened until the first send.
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(config.username, config.password))
            .build();

        Ok(Self { transport, from })
    }

    pub async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let to = mail.to.clone();
        let message = mail.into_message(&self.from)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        tracing::debug!(to = %to, "Mail handed to SMTP relay");
        Ok(())
    }
}
