// GET /api/categories

use axum::extract::State;
use axum::Json;

use crate::database::models::Category;
use crate::database::CategoryRepository;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryRepository::new(state.pool.clone()).list().await?;
    Ok(Json(categories))
}
