//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and mailer ports
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - PostgreSQL and in-memory stores, SMTP adapter
//! - `presentation/` - HTTP handlers, DTOs, extractors, router
//!
//! ## Features
//! - Registration with email + password
//! - Login issuing a one-day session token (HS256 JWT) in an HttpOnly cookie
//! - Password reset through a mailed, user-bound reset token
//! - Stateless logout (cookie cleared)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B policy for new passwords)
//! - Unknown email and wrong password are indistinguishable, timing included
//! - Session and reset tokens are separated by audience
//! - Tokens are not stored server-side and cannot be revoked before expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
