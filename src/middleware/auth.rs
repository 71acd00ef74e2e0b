use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{verify_token, TOKEN_COOKIE};
use crate::config;
use crate::error::ApiError;

/// Authenticated session extracted from the `token` cookie.
///
/// Use as an extractor parameter in any handler that requires
/// authentication; rejection is a 401 `{"message"}` response.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: i32,
    pub email: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| ApiError::unauthorized("No token provided"))?;

        let claims = verify_token(&token, &config::config().security)
            .ok_or_else(|| ApiError::unauthorized("Invalid token"))?;

        Ok(AuthSession {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
