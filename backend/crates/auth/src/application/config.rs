//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared through router state.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::user_id::UserId;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HS256 key for session and reset tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (1 day)
    pub session_ttl: Duration,
    /// Reset token lifetime (1 day)
    pub reset_token_ttl: Duration,
    /// Whether to add `Secure` to the session cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Frontend page that accepts `/<user id>/<token>`
    pub reset_link_base: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "token".to_string(),
            token_secret: vec![0u8; 32],
            session_ttl: Duration::from_secs(24 * 3600),
            reset_token_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            reset_link_base: "http://localhost:3000/reset_password".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development and tests)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Attributes of the session cookie; Max-Age follows the session lifetime
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }

    /// Link mailed by forgot-password
    pub fn reset_link(&self, user_id: &UserId, token: &str) -> String {
        format!(
            "{}/{}/{}",
            self.reset_link_base.trim_end_matches('/'),
            user_id,
            token
        )
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("token_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("reset_token_ttl", &self.reset_token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("reset_link_base", &self.reset_link_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "token");
        assert_eq!(config.session_ttl, Duration::from_secs(86_400));
        assert_eq!(config.reset_token_ttl, Duration::from_secs(86_400));
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert!(!AuthConfig::development().cookie_secure);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = AuthConfig::development().session_cookie();
        assert_eq!(cookie.name, "token");
        assert!(cookie.http_only);
        assert!(!cookie.secure);
        assert_eq!(cookie.max_age_secs, Some(86_400));
    }

    #[test]
    fn test_reset_link() {
        let config = AuthConfig {
            reset_link_base: "https://app.example.com/reset_password/".to_string(),
            ..AuthConfig::default()
        };
        let user_id = UserId::new();
        assert_eq!(
            config.reset_link(&user_id, "a.b.c"),
            format!("https://app.example.com/reset_password/{}/a.b.c", user_id)
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            token_secret: b"jwt-secret-value".to_vec(),
            password_pepper: Some(b"pepper-value".to_vec()),
            ..AuthConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("jwt-secret-value"));
        assert!(!debug.contains("pepper-value"));
    }
}
