//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub mono: Option<String>,
}

/// Created user. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub mono: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.user_name.to_string(),
            email: user.email.to_string(),
            mono: user.mono.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// `adminDashboard` or `userDashboard`
    pub dashboard: &'static str,
}

// ============================================================================
// Password Reset
// ============================================================================

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// `{"Status": ...}` body of both password endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
}

impl StatusResponse {
    pub const SUCCESS: &'static str = "Success";
    pub const USER_NOT_EXISTED: &'static str = "User not existed";

    pub fn success() -> Self {
        Self {
            status: Self::SUCCESS,
        }
    }

    pub fn user_not_existed() -> Self {
        Self {
            status: Self::USER_NOT_EXISTED,
        }
    }
}

// ============================================================================
// Logout / Session
// ============================================================================

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub dashboard: Option<&'static str>,
}

impl SessionStatusResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            email: None,
            is_admin: None,
            dashboard: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_mono_optional() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "TestPassword123!"
        }))
        .unwrap();
        assert!(req.mono.is_none());
    }

    #[test]
    fn test_status_response_shape() {
        let body = serde_json::to_value(StatusResponse::user_not_existed()).unwrap();
        assert_eq!(body, json!({"Status": "User not existed"}));
    }

    #[test]
    fn test_session_status_camel_case() {
        let body = serde_json::to_value(SessionStatusResponse {
            authenticated: true,
            email: Some("a@b.io".to_string()),
            is_admin: Some(false),
            dashboard: Some("userDashboard"),
        })
        .unwrap();
        assert_eq!(body["isAdmin"], json!(false));
        assert_eq!(body["dashboard"], json!("userDashboard"));
    }
}
