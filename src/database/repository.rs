use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::database::models::{
    Category, Item, ItemDetails, ItemListing, ItemStatus, NewItem, NewUser, User,
};
use crate::database::pool::DatabaseError;

/// Optional, AND-combined filters for the item listing query.
#[derive(Debug, Default, Clone)]
pub struct ItemFilters {
    /// Exact category name
    pub category: Option<String>,
    /// Case-insensitive substring match on owner location
    pub location: Option<String>,
    /// Case-insensitive substring match on title OR description
    pub search: Option<String>,
    /// Truncates the result; no continuation cursor
    pub limit: Option<i64>,
}

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A unique-constraint hit on the email column is
    /// reported as `DatabaseError::Duplicate`, which the edge maps to 409.
    pub async fn create(&self, user: NewUser) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, phone, location) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.phone)
        .bind(user.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DatabaseError::Duplicate("Email already exists".to_string())
            } else {
                DatabaseError::Sqlx(e)
            }
        })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered listing over available items, newest first.
    pub async fn list(&self, filters: &ItemFilters) -> Result<Vec<ItemListing>, DatabaseError> {
        let max_limit = crate::config::config().api.max_item_limit;
        let mut query = build_list_query(filters, max_limit);
        let items = query
            .build_query_as::<ItemListing>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ItemDetails>, DatabaseError> {
        let item = sqlx::query_as::<_, ItemDetails>(
            "SELECT i.*, u.name AS owner_name, u.email AS owner_email, u.phone AS owner_phone, \
                    u.location AS owner_location, c.name AS category_name \
             FROM items i \
             JOIN users u ON i.owner_id = u.id \
             JOIN categories c ON i.category_id = c.id \
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn create(&self, item: NewItem) -> Result<Item, DatabaseError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (title, description, category_id, owner_id, condition, availability_type, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(item.title)
        .bind(item.description)
        .bind(item.category_id)
        .bind(item.owner_id)
        .bind(item.condition.as_str())
        .bind(item.availability_type.as_str())
        .bind(item.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }
}

pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DatabaseError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }
}

/// Assemble the parameterized listing query. Only rows with
/// status = 'available' are ever returned; filters append AND clauses.
fn build_list_query(
    filters: &ItemFilters,
    max_limit: Option<i64>,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT i.*, u.name AS owner_name, u.location AS owner_location, c.name AS category_name \
         FROM items i \
         JOIN users u ON i.owner_id = u.id \
         JOIN categories c ON i.category_id = c.id \
         WHERE i.status = ",
    );
    query.push_bind(ItemStatus::Available.as_str());

    if let Some(category) = &filters.category {
        query.push(" AND c.name = ");
        query.push_bind(category.clone());
    }

    if let Some(location) = &filters.location {
        query.push(" AND u.location ILIKE ");
        query.push_bind(format!("%{}%", location));
    }

    if let Some(search) = &filters.search {
        let pattern = format!("%{}%", search);
        query.push(" AND (i.title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR i.description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    query.push(" ORDER BY i.created_at DESC");

    if let Some(limit) = effective_limit(filters.limit, max_limit) {
        query.push(" LIMIT ");
        query.push_bind(limit);
    }

    query
}

/// Clamp a requested limit to the configured ceiling. Absent or negative
/// requests fall through unlimited (the ceiling still applies).
fn effective_limit(requested: Option<i64>, max_limit: Option<i64>) -> Option<i64> {
    match (requested, max_limit) {
        (Some(n), Some(max)) => Some(n.clamp(0, max)),
        (Some(n), None) => Some(n.max(0)),
        (None, Some(max)) => Some(max),
        (None, None) => None,
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    // PostgreSQL unique constraint violation: error code 23505
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_query_guards_on_available_status() {
        let query = build_list_query(&ItemFilters::default(), None);
        let sql = query.sql();
        assert!(sql.contains("WHERE i.status = $1"));
        assert!(sql.contains("ORDER BY i.created_at DESC"));
        assert!(!sql.contains("ILIKE"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn search_filter_matches_title_or_description() {
        let filters = ItemFilters {
            search: Some("lamp".to_string()),
            ..Default::default()
        };
        let query = build_list_query(&filters, None);
        let sql = query.sql();
        assert!(sql.contains("i.title ILIKE $2"));
        assert!(sql.contains("i.description ILIKE $3"));
    }

    #[test]
    fn all_filters_are_and_combined() {
        let filters = ItemFilters {
            category: Some("Electronics".to_string()),
            location: Some("pune".to_string()),
            search: Some("lamp".to_string()),
            limit: Some(20),
        };
        let query = build_list_query(&filters, Some(100));
        let sql = query.sql();
        assert!(sql.contains("AND c.name = $2"));
        assert!(sql.contains("AND u.location ILIKE $3"));
        assert!(sql.contains("AND (i.title ILIKE $4 OR i.description ILIKE $5)"));
        assert!(sql.contains("LIMIT $6"));
    }

    #[test]
    fn only_code_23505_reads_as_a_duplicate() {
        // A real 23505 needs a live Postgres; the conflict path end to end
        // is exercised by the duplicate-registration integration test.
        // Here: nothing without a driver error code is ever a duplicate.
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
        assert!(!is_unique_violation(&sqlx::Error::ColumnNotFound(
            "email".to_string()
        )));
    }

    #[test]
    fn limit_is_clamped_to_ceiling() {
        assert_eq!(effective_limit(Some(20), Some(100)), Some(20));
        assert_eq!(effective_limit(Some(5000), Some(100)), Some(100));
        assert_eq!(effective_limit(Some(-3), Some(100)), Some(0));
        assert_eq!(effective_limit(None, Some(100)), Some(100));
        assert_eq!(effective_limit(None, None), None);
    }
}
