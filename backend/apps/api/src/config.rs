//! Process Configuration
//!
//! Read once from the environment at startup. Handlers never touch the
//! environment; they get what they need through router state.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::mail::SmtpConfig;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_RESET_LINK_BASE: &str = "http://localhost:3000/reset_password";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Everything the server needs to start
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<HeaderValue>,
    pub smtp: SmtpConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} must be set in environment"))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let email_user = required("EMAIL_USER")?;
        let email_pass = required("EMAIL_PASS")?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let cookie_secure = parse_or(&lookup, "COOKIE_SECURE", false)?;

        let origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins: Vec<HeaderValue> = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse()
                    .with_context(|| format!("FRONTEND_ORIGINS: invalid origin {origin:?}"))
            })
            .collect::<Result<_>>()?;
        if frontend_origins.is_empty() {
            bail!("FRONTEND_ORIGINS must name at least one origin");
        }

        let smtp = SmtpConfig {
            host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            from: email_user.clone(),
            username: email_user,
            password: email_pass,
        };

        let auth = AuthConfig {
            token_secret: jwt_secret.into_bytes(),
            session_ttl: Duration::from_secs(24 * 3600),
            reset_token_ttl: Duration::from_secs(24 * 3600),
            cookie_secure,
            password_pepper: lookup("PASSWORD_PEPPER")
                .filter(|p| !p.is_empty())
                .map(String::into_bytes),
            reset_link_base: lookup("RESET_LINK_BASE")
                .unwrap_or_else(|| DEFAULT_RESET_LINK_BASE.to_string()),
            ..AuthConfig::default()
        };

        Ok(Self {
            database_url,
            db_max_connections,
            port,
            frontend_origins,
            smtp,
            auth,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key}: cannot parse {raw:?}")),
        None => Ok(default),
    }
}
