use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{verify_token, TOKEN_COOKIE};
use crate::config;

/// Where unauthenticated visitors to protected pages are sent. The query
/// parameter hints the frontend to open its login dialog.
const LOGIN_REDIRECT: &str = "/?auth=login";

/// Session guard for the protected page prefixes (`/dashboard`,
/// `/list-item`).
///
/// Two states only: with a valid `token` cookie the request passes
/// through untouched; otherwise it is redirected home with a login hint.
/// The signed token is the whole session, so there is nothing to look up.
pub async fn require_session(request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    let authenticated = jar
        .get(TOKEN_COOKIE)
        .and_then(|cookie| verify_token(cookie.value(), &config::config().security))
        .is_some();

    if authenticated {
        next.run(request).await
    } else {
        Redirect::temporary(LOGIN_REDIRECT).into_response()
    }
}
