// GET /api/auth/me - current user from the session cookie

use axum::extract::State;
use axum::Json;

use crate::database::models::PublicUser;
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::middleware::AuthSession;
use crate::state::AppState;

/// Returns the profile for the session's user. The token can outlive the
/// row, so a vanished user is a 404 rather than a 401.
pub async fn me(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<PublicUser>, ApiError> {
    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user.into()))
}
