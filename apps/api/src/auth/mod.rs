//! Identity — resolves a session token to the signed-in user.
//!
//! Sign-in, sign-up and session minting live in the external identity service.
//! This module only reads sessions back.

pub mod session;

pub use session::RedisSessionProvider;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Malformed session payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the user owning `session_token`, or `None` for unknown/expired sessions.
    async fn current_user(&self, session_token: &str) -> Result<Option<User>, IdentityError>;
}

/// Extractor for handlers that require a signed-in user. Rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        let user = state
            .identity
            .current_user(&token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(CurrentUser(user))
    }
}

/// Reads the session token from `Authorization: Bearer` or the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
