// POST /api/auth/register - create an account and start a session

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::{self, password};
use crate::config;
use crate::database::models::{NewUser, PublicUser};
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

// Fields are optional at the wire so an omitted field lands on the same
// "All fields are required" answer as an empty one.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Registers a new user, issues a session token, and sets the `token`
/// cookie. Duplicate email surfaces as 409 without creating a row.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(CookieJar, Json<PublicUser>), ApiError> {
    let fields = (
        non_blank(body.name),
        non_blank(body.email),
        body.password.filter(|p| !p.is_empty()),
        non_blank(body.phone),
        non_blank(body.location),
    );
    let (name, email, password, phone, location) = match fields {
        (Some(n), Some(e), Some(p), Some(ph), Some(l)) => (n, e, p, ph, l),
        _ => return Err(ApiError::bad_request("All fields are required")),
    };

    if !is_valid_email(&email) {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters long",
        ));
    }

    let password_hash = password::hash_password(&password).map_err(|e| {
        tracing::error!("Password hashing failed: {}", e);
        ApiError::internal_server_error("Registration failed")
    })?;

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .create(NewUser {
            name,
            email: email.to_lowercase(),
            password_hash,
            phone,
            location,
        })
        .await?;

    let security = &config::config().security;
    let token = auth::sign_token(user.id, &user.email, security).map_err(|e| {
        tracing::error!("Token signing failed: {}", e);
        ApiError::internal_server_error("Registration failed")
    })?;

    let jar = jar.add(auth::session_cookie(token, security));
    Ok((jar, Json(user.into())))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Same shape the frontend enforces: exactly one '@', non-empty local
/// part, a dotted domain with no empty segments, no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && domain.split('.').all(|segment| !segment.is_empty())
        }
        _ => false,
    }
}
