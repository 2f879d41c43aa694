//! Email Value Object
//!
//! The login identifier. Stored trimmed and lowercased so lookups are
//! case-insensitive. Only addresses the mailer can deliver to are accepted.

use kernel::error::app_error::{AppError, AppResult};
use platform::mail::check_recipient;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalize and validate
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty")
                .with_action("Please enter your email address"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !is_valid_format(&email) || check_recipient(&email).is_err() {
            return Err(AppError::bad_request("Invalid email format")
                .with_action("Please enter a valid email address"));
        }

        Ok(Self(email))
    }

    /// Wrap a value read back from the datastore (already normalized)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_format(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH || domain.contains('@') {
        return false;
    }

    // RFC 5322 dot-atom
    if !local.chars().all(is_atext_or_dot)
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains(".."))
}

fn is_atext_or_dot(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c)
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new(".user@example.com").is_err());
        assert!(Email::new("us..er@example.com").is_err());
    }

    #[test]
    fn test_email_rejects_undeliverable_local_part() {
        for addr in [
            "a<b@example.com",
            "a,b@example.com",
            "a\"b@example.com",
            "a(b)@example.com",
            "a;b@example.com",
            "a:b@example.com",
            "a[b]@example.com",
        ] {
            let err = Email::new(addr).unwrap_err();
            assert_eq!(err.status_code(), 400, "{addr}");
        }
    }

    #[test]
    fn test_accepted_email_is_a_valid_recipient() {
        for addr in [
            "user@example.com",
            "First.Last+tag@Example.co.jp",
            "a_b-c@sub.example.com",
        ] {
            let email = Email::new(addr).unwrap();
            assert!(check_recipient(email.as_str()).is_ok(), "{addr}");
        }
    }

    #[test]
    fn test_email_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::new(long).unwrap_err().status_code(), 400);
    }

    #[test]
    fn test_email_case_and_whitespace_normalization() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let email = Email::new("a@b.io").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@b.io\"");
    }
}
