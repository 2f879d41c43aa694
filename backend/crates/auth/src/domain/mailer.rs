//! Mailer Port
//!
//! Outgoing mail as seen by the application layer.

pub use platform::mail::OutgoingMail;

use crate::error::AuthResult;

#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Deliver one message. Failures surface as `AuthError::Mail`.
    async fn send(&self, mail: OutgoingMail) -> AuthResult<()>;
}
