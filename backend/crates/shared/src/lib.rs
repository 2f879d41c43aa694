//! Shared Kernel
//!
//! Vocabulary that every backend crate agrees on:
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//! - Typed identifiers ([`id::Id`])
//!
//! Keep this crate small. Anything domain-specific belongs in its own crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
