//! User Entity
//!
//! One account record: profile fields, credentials and the admin flag.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// Frontend route a user lands on after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    User,
}

impl Dashboard {
    pub fn for_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Dashboard::Admin
        } else {
            Dashboard::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dashboard::Admin => "adminDashboard",
            Dashboard::User => "userDashboard",
        }
    }
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name, not unique
    pub user_name: UserName,
    /// Login identifier (unique)
    pub email: Email,
    /// Mobile number, stored as given
    pub mono: Option<String>,
    pub password_hash: UserPassword,
    /// Admin accounts are created out of band; registration never sets this
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New non-admin user
    pub fn new(
        user_name: UserName,
        email: Email,
        mono: Option<String>,
        password_hash: UserPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            mono,
            password_hash,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::for_admin_flag(self.is_admin)
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn user() -> User {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        User::new(
            UserName::new("alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Some("+15550100".to_string()),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_is_not_admin() {
        let user = user();
        assert!(!user.is_admin);
        assert_eq!(user.dashboard(), Dashboard::User);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_dashboard_names() {
        assert_eq!(Dashboard::for_admin_flag(true).as_str(), "adminDashboard");
        assert_eq!(Dashboard::for_admin_flag(false).as_str(), "userDashboard");
    }

    #[test]
    fn test_set_password_touches_updated_at() {
        let mut user = user();
        let before = user.updated_at;
        let raw = RawPassword::new("AnotherPass456!".to_string()).unwrap();
        user.set_password(UserPassword::from_raw(&raw, None).unwrap());
        assert!(user.updated_at >= before);
        assert!(user.password_hash.verify(&raw, None));
    }
}
