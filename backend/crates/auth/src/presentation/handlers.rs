//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{SessionClaims, TokenService};
use crate::application::{
    ForgotPasswordOutcome, ForgotPasswordUseCase, LoginInput, LoginUseCase, RegisterInput,
    RegisterUseCase, ResetPasswordInput, ResetPasswordUseCase,
};
use crate::domain::mailer::Mailer;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    ResetPasswordRequest, SessionStatusResponse, StatusResponse, UserResponse,
};
use crate::presentation::extract::AppJson;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, M>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R, M> AuthAppState<R, M>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, mailer: M, config: AuthConfig) -> Self {
        let tokens = TokenService::new(&config);
        Self {
            repo: Arc::new(repo),
            mailer: Arc::new(mailer),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        }
    }
}

impl<R, M> FromRef<AuthAppState<R, M>> for Arc<AuthConfig>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AuthAppState<R, M>) -> Self {
        state.config.clone()
    }
}

impl<R, M> FromRef<AuthAppState<R, M>> for Arc<TokenService>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AuthAppState<R, M>) -> Self {
        state.tokens.clone()
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
        mono: req.mono,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie =
        platform::cookie::set_cookie_header(&state.config.session_cookie(), &output.session_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            token: output.session_token,
            dashboard: output.dashboard.as_str(),
        }),
    ))
}

// ============================================================================
// Forgot / Reset Password
// ============================================================================

/// POST /forgot-password
pub async fn forgot_password<R, M>(
    State(state): State<AuthAppState<R, M>>,
    AppJson(req): AppJson<ForgotPasswordRequest>,
) -> AuthResult<Json<StatusResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = ForgotPasswordUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let body = match use_case.execute(&req.email).await? {
        ForgotPasswordOutcome::UserNotFound => StatusResponse::user_not_existed(),
        ForgotPasswordOutcome::MailSent => StatusResponse::success(),
    };

    Ok(Json(body))
}

/// POST /reset-password/{id}/{token}
pub async fn reset_password<R, M>(
    State(state): State<AuthAppState<R, M>>,
    Path((user_id, token)): Path<(String, String)>,
    AppJson(req): AppJson<ResetPasswordRequest>,
) -> AuthResult<Json<StatusResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = ResetPasswordInput {
        user_id,
        token,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(StatusResponse::success()))
}

// ============================================================================
// Logout / Session
// ============================================================================

/// GET /logout
///
/// Tokens are stateless, so logging out only clears the cookie.
pub async fn logout<R, M>(State(state): State<AuthAppState<R, M>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let cookie = state.config.session_cookie().build_delete_cookie();

    tracing::debug!("Session cookie cleared");

    (
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out",
        }),
    )
}

/// GET /session
pub async fn session_status(session: Option<SessionClaims>) -> Json<SessionStatusResponse> {
    match session {
        Some(claims) => Json(SessionStatusResponse {
            authenticated: true,
            dashboard: Some(claims.dashboard().as_str()),
            is_admin: Some(claims.is_admin),
            email: Some(claims.email),
        }),
        None => Json(SessionStatusResponse::anonymous()),
    }
}
