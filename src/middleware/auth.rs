use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::{
    dto::auth::Claims,
    error::{AppError, AppResult},
    models::{SessionUser, UserRole},
    state::AppState,
};

pub const SESSION_COOKIE_NAME: &str = "wedding-gift-session";
pub const SESSION_TTL_DAYS: i64 = 7;

/// Signs the session user into the cookie value.
pub fn encode_session(user: &SessionUser, secret: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(chrono::Duration::days(SESSION_TTL_DAYS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        user: user.clone(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Tampered, expired or malformed values read as "no session".
pub fn decode_session(token: &str, secret: &str) -> Option<SessionUser> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims.user)
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}

/// The signed-in user, read from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE_NAME)
            .map(Cookie::value)
            .filter(|value| !value.is_empty())
            .ok_or(AppError::Unauthorized)?;

        decode_session(token, state.config.session_secret.expose_secret())
            .map(AuthUser)
            .ok_or(AppError::Unauthorized)
    }
}

pub fn ensure_role(user: &SessionUser, role: UserRole) -> Result<(), AppError> {
    if user.role != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// Returns the client id a bride's session is bound to.
pub fn ensure_client(user: &SessionUser) -> Result<Uuid, AppError> {
    ensure_role(user, UserRole::Client)?;
    user.client_id.ok_or(AppError::Forbidden)
}

pub fn ensure_franchisee(user: &SessionUser) -> Result<Uuid, AppError> {
    ensure_role(user, UserRole::Franchisee)?;
    user.franchisee_id.ok_or(AppError::Forbidden)
}
