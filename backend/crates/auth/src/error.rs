//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::mail::MailError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered
    #[error("User already exists")]
    EmailTaken,

    /// Unknown email or wrong password; the two are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Reset token invalid, expired, or issued for another user
    #[error("Invalid token")]
    InvalidToken,

    /// Session cookie missing, invalid or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Rejected input (malformed body, bad email, weak password)
    #[error("{0}")]
    Validation(AppError),

    /// Mail relay failure
    #[error("Mail delivery failed: {0}")]
    Mail(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken | AuthError::InvalidToken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Validation(e) => e.kind(),
            AuthError::Mail(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures render a generic message; the cause only goes to the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(e) => {
                let err = AppError::new(e.kind(), e.message().to_owned());
                match e.action() {
                    Some(action) => err.with_action(action.to_owned()),
                    None => err,
                }
            }
            AuthError::Mail(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Mail(msg) => {
                tracing::error!(message = %msg, "Auth mail delivery error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected password reset token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::Validation(err)
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(
            AppError::bad_request(rejection.body_text())
                .with_action("Please send a JSON body with all required fields"),
        )
    }
}

impl From<MailError> for AuthError {
    fn from(err: MailError) -> Self {
        AuthError::Mail(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Mail("relay down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = AuthError::Internal("connection reset by peer".to_string());
        let app = err.to_app_error();
        assert_eq!(app.message(), "Internal error");
    }

    #[test]
    fn test_validation_keeps_message_and_action() {
        let err = AuthError::from(
            AppError::bad_request("Invalid email format").with_action("Check the address"),
        );
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "Invalid email format");
        assert_eq!(app.action(), Some("Check the address"));
    }

    #[test]
    fn test_server_app_error_becomes_internal() {
        let err = AuthError::from(AppError::internal("boom"));
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_into_response_status() {
        let response = AuthError::EmailTaken.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
