use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::CatalogItem, pricing::DiscountBreakdown};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    pub position: usize,
    pub item: CatalogItem,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub pricing: DiscountBreakdown,
    pub display_total: String,
}
