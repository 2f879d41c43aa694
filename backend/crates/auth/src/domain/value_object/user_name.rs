//! User Name Value Object
//!
//! Display name chosen at registration. Free text, not an identifier:
//! duplicates are allowed and login goes through the email.
//!
//! Processing order: NFKC normalization, trim, then validation.

use std::fmt;

use kernel::error::app_error::AppError;
use serde::Serialize;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains invalid control characters")]
    ControlCharacter,
}

impl From<UserNameError> for AppError {
    fn from(err: UserNameError) -> Self {
        AppError::bad_request(err.to_string()).with_action("Please choose a different username")
    }
}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(UserNameError::ControlCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wrap a value read back from the datastore
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserName({:?})", self.0)
    }
}
