//! Domain Layer
//!
//! Entities, value objects, and the ports the application layer depends on.

pub mod entity;
pub mod mailer;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{Dashboard, User};
pub use mailer::{Mailer, OutgoingMail};
pub use repository::UserRepository;
