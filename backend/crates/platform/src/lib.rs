//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Password hashing (Argon2id, NIST SP 800-63B policy)
//! - Signed bearer tokens (HS256 JWT)
//! - Cookie helpers
//! - Outgoing mail over SMTP

pub mod cookie;
pub mod mail;
pub mod password;
pub mod token;
