//! Signed Bearer Tokens
//!
//! HS256 JWTs over caller-defined claims. Callers separate token kinds by
//! audience: a token signed for one audience never verifies for another.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Token signing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// HS256 signer/verifier bound to one secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Sign `claims`. The claims must carry `sub`, `aud` and `exp`.
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature, expiry and audience, then decode the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str, audience: &str) -> Result<C, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        decode::<C>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                other => TokenError::Invalid(format!("{other:?}")),
            })
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        aud: String,
        exp: i64,
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    fn claims(aud: &str, exp: i64) -> TestClaims {
        TestClaims {
            sub: "user-1".to_string(),
            aud: aud.to_string(),
            exp,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new(b"test-secret-key-12345");
        let original = claims("session", now() + 3600);

        let token = signer.sign(&original).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = signer.verify(&token, "session").unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new(b"test-secret-key-12345");
        let token = signer.sign(&claims("session", now() - 86_400)).unwrap();

        let result = signer.verify::<TestClaims>(&token, "session");
        assert_eq!(result.unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let signer = TokenSigner::new(b"test-secret-key-12345");
        let token = signer.sign(&claims("session", now() + 3600)).unwrap();

        let result = signer.verify::<TestClaims>(&token, "password-reset");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_different_secrets_reject() {
        let signer1 = TokenSigner::new(b"secret1");
        let signer2 = TokenSigner::new(b"secret2");
        let token = signer1.sign(&claims("session", now() + 3600)).unwrap();

        assert!(signer2.verify::<TestClaims>(&token, "session").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let signer = TokenSigner::new(b"secret");
        let result = signer.verify::<TestClaims>("invalid.token.here", "session");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = TokenSigner::new(b"super-secret");
        assert!(!format!("{:?}", signer).contains("super-secret"));
    }
}
