//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod tokens;

// Re-exports
pub use config::AuthConfig;
pub use forgot_password::{ForgotPasswordOutcome, ForgotPasswordUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use reset_password::{ResetPasswordInput, ResetPasswordUseCase};
pub use tokens::{ResetClaims, SessionClaims, TokenService};
