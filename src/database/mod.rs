pub mod models;
pub mod pool;
pub mod repository;

pub use pool::{connect, health_check, DatabaseError};
pub use repository::{CategoryRepository, ItemFilters, ItemRepository, UserRepository};
