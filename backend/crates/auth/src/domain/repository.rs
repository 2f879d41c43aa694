//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user. A duplicate email fails with `AuthError::EmailTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Overwrite the password hash. Returns `false` when no such user exists.
    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<bool>;
}
