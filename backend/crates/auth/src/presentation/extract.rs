//! Request Extractors

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequest, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;

use crate::application::config::AuthConfig;
use crate::application::tokens::{SessionClaims, TokenService};
use crate::error::AuthError;

/// `axum::Json` whose rejection renders as an `AuthError` (400, problem JSON)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct AppJson<T>(pub T);

/// Requires a valid session cookie; rejects with 401 otherwise
impl<S> FromRequestParts<S> for SessionClaims
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AuthConfig>::from_ref(state);
        let tokens = Arc::<TokenService>::from_ref(state);

        let token = platform::cookie::extract_cookie(&parts.headers, &config.session_cookie_name)
            .ok_or(AuthError::SessionInvalid)?;

        tokens.verify_session(&token)
    }
}

/// `Option<SessionClaims>`: `None` for a missing or invalid session
impl<S> OptionalFromRequestParts<S> for SessionClaims
where
    S: Send + Sync,
    Arc<AuthConfig>: FromRef<S>,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(<SessionClaims as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .ok())
    }
}
