use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{VendorAccount, VendorItem};

#[derive(Deserialize, Debug, ToSchema)]
pub struct VendorCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddVendorItemRequest {
    pub item_name: String,
    /// Price in cents.
    pub item_price: i64,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct VendorMetrics {
    pub total_items: usize,
    pub total_value: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VendorDashboard {
    pub vendor: VendorAccount,
    pub items: Vec<VendorItem>,
    pub metrics: VendorMetrics,
}
