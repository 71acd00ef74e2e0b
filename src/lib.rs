pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // JSON API
        .merge(auth_routes())
        .merge(api_routes())
        // Protected page prefixes behind the session guard
        .merge(page_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
}

fn api_routes() -> Router<AppState> {
    use handlers::{categories, items};

    Router::new()
        .route("/api/categories", get(categories::list_categories))
        .route(
            "/api/items",
            get(items::list_items).post(items::create_item),
        )
        .route("/api/items/:id", get(items::get_item))
}

fn page_routes() -> Router<AppState> {
    use handlers::pages;

    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/dashboard/*rest", get(pages::dashboard))
        .route("/list-item", get(pages::list_item))
        .route("/list-item/*rest", get(pages::list_item))
        .route_layer(axum::middleware::from_fn(middleware::require_session))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "EcoShare API",
        "version": version,
        "endpoints": {
            "auth": "/api/auth/register, /api/auth/login, /api/auth/me",
            "categories": "/api/categories",
            "items": "/api/items[?category=&location=&search=&limit=], /api/items/:id",
            "health": "/health",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
