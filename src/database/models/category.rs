use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Static reference data, seeded once.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}
