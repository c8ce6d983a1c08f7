use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the food catalog. `price` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub category: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Vendor {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VendorItem {
    pub id: i64,
    pub vendor_id: i64,
    pub item_name: String,
    pub item_price: i64,
}

/// The vendor logged in on the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VendorAccount {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub food: String,
    pub rating: u8,
    pub comment: String,
    pub submitted_at: DateTime<Utc>,
}

/// What was charged for the most recently confirmed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderReceipt {
    pub items: Vec<CatalogItem>,
    pub subtotal: i64,
    pub discount: crate::pricing::DiscountCode,
    pub discount_amount: i64,
    pub total: i64,
    pub placed_at: DateTime<Utc>,
}
