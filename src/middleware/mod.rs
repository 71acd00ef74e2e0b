pub mod auth;
pub mod session;

pub use auth::AuthSession;
pub use session::require_session;
