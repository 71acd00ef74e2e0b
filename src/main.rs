use ecoshare_api::state::AppState;
use ecoshare_api::{app, config, database};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting EcoShare API in {:?} mode", config.environment);

    // Lazy pool: the process comes up even while the store is unreachable
    let pool = database::connect(&config.database)
        .unwrap_or_else(|e| panic!("failed to initialize database pool: {}", e));

    let app = app(AppState { pool });

    // Allow tests or deployments to override port via env
    let port = std::env::var("ECOSHARE_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("EcoShare API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
