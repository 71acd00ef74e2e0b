use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Physical condition of a listed item.
///
/// Stored as text in the `items.condition` column; the enum exists so
/// request bodies are validated at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }
}

/// Governs whether a price is required: rent/sell need one, free forbids
/// one, exchange leaves it optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityType {
    Free,
    Rent,
    Sell,
    Exchange,
}

impl AvailabilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityType::Free => "free",
            AvailabilityType::Rent => "rent",
            AvailabilityType::Sell => "sell",
            AvailabilityType::Exchange => "exchange",
        }
    }

    /// Rent and sell listings must carry a positive price
    pub fn requires_price(&self) -> bool {
        matches!(self, AvailabilityType::Rent | AvailabilityType::Sell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Rented,
    Sold,
    Unavailable,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Rented => "rented",
            ItemStatus::Sold => "sold",
            ItemStatus::Unavailable => "unavailable",
        }
    }
}

/// Bare item row as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub owner_id: i32,
    pub condition: String,
    pub availability_type: String,
    pub price: Option<Decimal>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Item row joined with owner name/location and category name, as returned
/// by the listing query.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: Item,
    pub owner_name: String,
    pub owner_location: Option<String>,
    pub category_name: String,
}

/// Detail view adds the owner's contact fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: Item,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub owner_location: Option<String>,
    pub category_name: String,
}

/// Insert payload for a new listing. Built by the handler after validation;
/// `owner_id` always comes from the authenticated session.
#[derive(Debug)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub owner_id: i32,
    pub condition: Condition,
    pub availability_type: AvailabilityType,
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parses_snake_case() {
        let c: Condition = serde_json::from_str("\"like_new\"").unwrap();
        assert_eq!(c, Condition::LikeNew);
        assert_eq!(c.as_str(), "like_new");
    }

    #[test]
    fn unknown_condition_is_rejected() {
        assert!(serde_json::from_str::<Condition>("\"mint\"").is_err());
    }

    #[test]
    fn price_requirement_follows_availability() {
        assert!(AvailabilityType::Rent.requires_price());
        assert!(AvailabilityType::Sell.requires_price());
        assert!(!AvailabilityType::Free.requires_price());
        assert!(!AvailabilityType::Exchange.requires_price());
    }
}
