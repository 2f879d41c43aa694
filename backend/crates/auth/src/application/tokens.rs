//! Session and Reset Tokens
//!
//! Both kinds are HS256 JWTs signed with the same key and told apart by
//! audience. The subject is always the user id.

use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::token::{TokenError, TokenSigner};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{Dashboard, User};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims of the login session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub is_admin: bool,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub const AUDIENCE: &'static str = "session";

    pub fn new(user: &User, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user.user_id.to_string(),
            email: user.email.to_string(),
            is_admin: user.is_admin,
            aud: Self::AUDIENCE.to_string(),
            iat,
            exp: iat + ttl.as_secs() as i64,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::for_admin_flag(self.is_admin)
    }
}

/// Claims of the password reset token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetClaims {
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl ResetClaims {
    pub const AUDIENCE: &'static str = "password-reset";

    pub fn new(user_id: &UserId, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user_id.to_string(),
            aud: Self::AUDIENCE.to_string(),
            iat,
            exp: iat + ttl.as_secs() as i64,
        }
    }
}

/// Issues and checks both token kinds
#[derive(Debug, Clone)]
pub struct TokenService {
    signer: TokenSigner,
    session_ttl: Duration,
    reset_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            signer: TokenSigner::new(&config.token_secret),
            session_ttl: config.session_ttl,
            reset_ttl: config.reset_token_ttl,
        }
    }

    pub fn issue_session(&self, user: &User, now: DateTime<Utc>) -> AuthResult<String> {
        self.signer
            .sign(&SessionClaims::new(user, now, self.session_ttl))
            .map_err(signing_failed)
    }

    pub fn verify_session(&self, token: &str) -> AuthResult<SessionClaims> {
        self.signer
            .verify(token, SessionClaims::AUDIENCE)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Session token rejected");
                AuthError::SessionInvalid
            })
    }

    pub fn issue_reset(&self, user_id: &UserId, now: DateTime<Utc>) -> AuthResult<String> {
        self.signer
            .sign(&ResetClaims::new(user_id, now, self.reset_ttl))
            .map_err(signing_failed)
    }

    /// Accept `token` only if it is a live reset token issued for `user_id`
    pub fn verify_reset(&self, token: &str, user_id: &UserId) -> AuthResult<ResetClaims> {
        let claims: ResetClaims = self
            .signer
            .verify(token, ResetClaims::AUDIENCE)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Reset token rejected");
                AuthError::InvalidToken
            })?;

        if claims.sub != user_id.to_string() {
            tracing::debug!(user_id = %user_id, "Reset token issued for another user");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}

fn signing_failed(err: TokenError) -> AuthError {
    AuthError::Internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, user_name::UserName, user_password::{RawPassword, UserPassword},
    };

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_random_secret())
    }

    fn user(is_admin: bool) -> User {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let mut user = User::new(
            UserName::new("alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            None,
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        user.is_admin = is_admin;
        user
    }

    #[test]
    fn test_session_roundtrip() {
        let tokens = service();
        let user = user(true);
        let token = tokens.issue_session(&user, Utc::now()).unwrap();

        let claims = tokens.verify_session(&token).unwrap();
        assert_eq!(claims.sub, user.user_id.to_string());
        assert_eq!(claims.email, "alice@example.com");
        assert!(claims.is_admin);
        assert_eq!(claims.dashboard(), Dashboard::Admin);
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_expired_session_rejected() {
        let tokens = service();
        let issued = Utc::now() - chrono::Duration::days(2);
        let token = tokens.issue_session(&user(false), issued).unwrap();

        assert!(matches!(
            tokens.verify_session(&token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_reset_roundtrip() {
        let tokens = service();
        let user_id = UserId::new();
        let token = tokens.issue_reset(&user_id, Utc::now()).unwrap();

        let claims = tokens.verify_reset(&token, &user_id).unwrap();
        assert_eq!(claims.aud, "password-reset");
    }

    #[test]
    fn test_reset_for_other_user_rejected() {
        let tokens = service();
        let token = tokens.issue_reset(&UserId::new(), Utc::now()).unwrap();

        assert!(matches!(
            tokens.verify_reset(&token, &UserId::new()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_reset_rejected() {
        let tokens = service();
        let user_id = UserId::new();
        let issued = Utc::now() - chrono::Duration::days(2);
        let token = tokens.issue_reset(&user_id, issued).unwrap();

        assert!(matches!(
            tokens.verify_reset(&token, &user_id),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_kinds_do_not_mix() {
        let tokens = service();
        let user = user(false);

        let session = tokens.issue_session(&user, Utc::now()).unwrap();
        assert!(tokens.verify_reset(&session, &user.user_id).is_err());

        let reset = tokens.issue_reset(&user.user_id, Utc::now()).unwrap();
        assert!(tokens.verify_session(&reset).is_err());
    }

    #[test]
    fn test_other_secret_rejected() {
        let user = user(false);
        let token = service().issue_session(&user, Utc::now()).unwrap();
        assert!(service().verify_session(&token).is_err());
    }
}
