use sqlx::PgPool;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Holds the process-wide store handle: built once at startup, cloned per
/// request (a `PgPool` clone is a cheap reference).
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
