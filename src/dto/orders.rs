use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::tracker::TrackerView, models::OrderReceipt, pricing::DiscountCode};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub discount: DiscountCode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderConfirmation {
    pub receipt: OrderReceipt,
    pub tracker: TrackerView,
}
