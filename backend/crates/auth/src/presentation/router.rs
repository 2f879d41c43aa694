//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::mailer::Mailer;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository and mailer implementation
pub fn auth_router<R, M>(repo: R, mailer: M, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R, M>))
        .route("/login", post(handlers::login::<R, M>))
        .route("/forgot-password", post(handlers::forgot_password::<R, M>))
        .route(
            "/reset-password/{id}/{token}",
            post(handlers::reset_password::<R, M>),
        )
        .route("/logout", get(handlers::logout::<R, M>))
        .route("/session", get(handlers::session_status))
        .with_state(AuthAppState::new(repo, mailer, config))
}
