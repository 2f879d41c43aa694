//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use extract::AppJson;
pub use handlers::AuthAppState;
pub use router::auth_router;
