// POST /api/auth/login - verify credentials and start a session

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::{self, password};
use crate::config;
use crate::database::models::PublicUser;
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticates by email and password. Unknown email and wrong password
/// produce the same 401 message so neither leaks which part was wrong.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<(CookieJar, Json<PublicUser>), ApiError> {
    let email = body
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    let password = body.password.filter(|p| !p.is_empty());
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) => (e, p),
        _ => return Err(ApiError::bad_request("Email and password are required")),
    };

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_email(&email.to_lowercase())
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let valid = password::verify_password(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification failed for user {}: {}", user.id, e);
        ApiError::internal_server_error("Login failed")
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let security = &config::config().security;
    let token = auth::sign_token(user.id, &user.email, security).map_err(|e| {
        tracing::error!("Token signing failed: {}", e);
        ApiError::internal_server_error("Login failed")
    })?;

    let jar = jar.add(auth::session_cookie(token, security));
    Ok((jar, Json(user.into())))
}
