//! In-Memory Repository Implementation
//!
//! Process-local store with the same uniqueness rules as the PostgreSQL
//! schema. Used by tests and local runs without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Flip the admin flag; admins are never created through registration
    pub async fn set_admin(&self, user_id: &UserId, is_admin: bool) -> bool {
        match self.users.write().await.get_mut(user_id) {
            Some(user) => {
                user.is_admin = is_admin;
                user.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.read().await.values().any(|u| &u.email == email))
    }

    async fn update_password(
        &self,
        user_id: &UserId,
        password_hash: &UserPassword,
    ) -> AuthResult<bool> {
        match self.users.write().await.get_mut(user_id) {
            Some(user) => {
                user.set_password(password_hash.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};

    fn user(email: &str) -> User {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        User::new(
            UserName::new("alice").unwrap(),
            Email::new(email).unwrap(),
            None,
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = user("alice@example.com");
        repo.create(&user).await.unwrap();

        let email = Email::new("ALICE@example.com").unwrap();
        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.user_id, user.user_id);
        assert!(repo.exists_by_email(&email).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice@example.com")).await.unwrap();

        let result = repo.create(&user("alice@example.com")).await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_password() {
        let repo = InMemoryUserRepository::new();
        let user = user("alice@example.com");
        repo.create(&user).await.unwrap();

        let raw = RawPassword::new("BrandNewPass789!".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();
        assert!(repo.update_password(&user.user_id, &hash).await.unwrap());
        assert!(!repo.update_password(&UserId::new(), &hash).await.unwrap());

        let stored = repo.find_by_email(&user.email).await.unwrap().unwrap();
        assert!(stored.password_hash.verify(&raw, None));
    }

    #[tokio::test]
    async fn test_set_admin() {
        let repo = InMemoryUserRepository::new();
        let user = user("root@example.com");
        repo.create(&user).await.unwrap();

        assert!(repo.set_admin(&user.user_id, true).await);
        assert!(repo.find_by_email(&user.email).await.unwrap().unwrap().is_admin);
    }
}
