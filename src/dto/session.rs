use serde::Serialize;
use utoipa::ToSchema;

use crate::session::OrderStatus;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionSummary {
    pub cart_items: usize,
    pub cart_subtotal: i64,
    pub order_status: OrderStatus,
    pub reviews: usize,
    pub vendor: Option<String>,
}
