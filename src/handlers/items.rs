// Item listing, detail, and creation handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::database::models::{
    AvailabilityType, Condition, Item, ItemDetails, ItemListing, NewItem,
};
use crate::database::{ItemFilters, ItemRepository};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::AuthSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/items - filtered search over available listings
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemQuery>,
) -> Result<Json<Vec<ItemListing>>, ApiError> {
    let filters = ItemFilters {
        category: none_if_blank(params.category),
        location: none_if_blank(params.location),
        search: none_if_blank(params.search),
        limit: params.limit,
    };

    let items = ItemRepository::new(state.pool.clone()).list(&filters).await?;
    Ok(Json(items))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemDetails>, ApiError> {
    ItemRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Item not found"))
}

// Optional at the wire: an omitted field and an empty one both answer
// "Missing required fields" rather than a deserializer 422.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub condition: Option<Condition>,
    pub availability_type: Option<AvailabilityType>,
    pub price: Option<Decimal>,
}

/// POST /api/items - create a listing owned by the session user
pub async fn create_item(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(body): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item = validate_new_item(body, session.user_id)?;
    let item = ItemRepository::new(state.pool.clone()).create(new_item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Boundary validation for new listings. Price rules follow the
/// availability type: forced NULL for free, required positive for
/// rent/sell, optional (but positive when given) for exchange.
fn validate_new_item(body: CreateItemRequest, owner_id: i32) -> Result<NewItem, ApiError> {
    let fields = (
        none_if_blank(body.title),
        none_if_blank(body.description),
        body.category_id.filter(|id| *id > 0),
        body.condition,
        body.availability_type,
    );
    let (title, description, category_id, condition, availability_type) = match fields {
        (Some(t), Some(d), Some(c), Some(cond), Some(a)) => (t, d, c, cond, a),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    let price = match availability_type {
        AvailabilityType::Free => None,
        AvailabilityType::Rent | AvailabilityType::Sell => match body.price {
            Some(p) if p > Decimal::ZERO => Some(p),
            _ => {
                return Err(ApiError::bad_request(
                    "Price is required for rent/sell items",
                ))
            }
        },
        AvailabilityType::Exchange => match body.price {
            Some(p) if p <= Decimal::ZERO => {
                return Err(ApiError::bad_request("Price must be greater than zero"))
            }
            other => other,
        },
    };

    Ok(NewItem {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        category_id,
        owner_id,
        condition,
        availability_type,
        price,
    })
}

/// Empty values behave as absent, for both query filters and body fields
fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(availability_type: AvailabilityType, price: Option<Decimal>) -> CreateItemRequest {
        CreateItemRequest {
            title: Some("Desk lamp".to_string()),
            description: Some("Warm white, barely used".to_string()),
            category_id: Some(3),
            condition: Some(Condition::Good),
            availability_type: Some(availability_type),
            price,
        }
    }

    #[test]
    fn free_items_store_no_price_even_when_supplied() {
        let body = request(AvailabilityType::Free, Some(Decimal::new(500, 0)));
        let item = validate_new_item(body, 1).expect("free item should validate");
        assert_eq!(item.price, None);
        assert_eq!(item.owner_id, 1);
    }

    #[test]
    fn rent_without_price_is_rejected() {
        let body = request(AvailabilityType::Rent, None);
        let err = validate_new_item(body, 1).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn sell_with_non_positive_price_is_rejected() {
        let body = request(AvailabilityType::Sell, Some(Decimal::ZERO));
        assert!(validate_new_item(body, 1).is_err());

        let body = request(AvailabilityType::Sell, Some(Decimal::new(-100, 2)));
        assert!(validate_new_item(body, 1).is_err());
    }

    #[test]
    fn sell_with_positive_price_passes_through() {
        let body = request(AvailabilityType::Sell, Some(Decimal::new(19999, 2)));
        let item = validate_new_item(body, 7).expect("priced sale should validate");
        assert_eq!(item.price, Some(Decimal::new(19999, 2)));
    }

    #[test]
    fn exchange_price_is_optional() {
        let body = request(AvailabilityType::Exchange, None);
        assert!(validate_new_item(body, 1).is_ok());

        let body = request(AvailabilityType::Exchange, Some(Decimal::new(-1, 0)));
        assert!(validate_new_item(body, 1).is_err());
    }

    #[test]
    fn blank_title_or_description_is_rejected() {
        let mut body = request(AvailabilityType::Free, None);
        body.title = Some("   ".to_string());
        assert!(validate_new_item(body, 1).is_err());

        let mut body = request(AvailabilityType::Free, None);
        body.description = Some(String::new());
        assert!(validate_new_item(body, 1).is_err());
    }

    #[test]
    fn omitted_fields_read_as_missing_not_malformed() {
        let mut body = request(AvailabilityType::Free, None);
        body.condition = None;
        let err = validate_new_item(body, 1).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Missing required fields");

        let mut body = request(AvailabilityType::Free, None);
        body.category_id = None;
        assert!(validate_new_item(body, 1).is_err());
    }

    #[test]
    fn blank_query_params_are_dropped() {
        assert_eq!(none_if_blank(Some("  ".to_string())), None);
        assert_eq!(none_if_blank(Some("lamp".to_string())), Some("lamp".to_string()));
        assert_eq!(none_if_blank(None), None);
    }
}
