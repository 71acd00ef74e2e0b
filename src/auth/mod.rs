pub mod password;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;

/// Name of the session cookie carrying the signed token
pub const TOKEN_COOKIE: &str = "token";

/// Claims asserted by a session token. The signed token is the entire
/// session; there is no server-side session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i32, email: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::days(expiry_days)).timestamp();

        Self {
            user_id,
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum TokenError {
    Generation(String),
    InvalidSecret,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Generation(msg) => write!(f, "token generation error: {}", msg),
            TokenError::InvalidSecret => write!(f, "invalid token secret"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Sign a session token for the given user. Expiry matches the cookie
/// max-age so the token and cookie lapse together.
pub fn sign_token(user_id: i32, email: &str, security: &SecurityConfig) -> Result<String, TokenError> {
    if security.jwt_secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let claims = Claims::new(user_id, email.to_string(), security.token_expiry_days);
    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify a session token and return its claims.
///
/// Returns `None` on expiry, signature mismatch, or malformed input -- it
/// never surfaces an error to the caller. Callers map `None` to a 401 or a
/// login redirect as appropriate.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Option<Claims> {
    if security.jwt_secret.is_empty() {
        return None;
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let validation = Validation::default(); // HS256, validates exp

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .ok()
}

/// Build the httpOnly session cookie carrying a signed token.
pub fn session_cookie(token: String, security: &SecurityConfig) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .secure(security.cookie_secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::days(security.token_expiry_days))
        .build()
}
