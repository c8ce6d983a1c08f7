use serde::Deserialize;
use utoipa::IntoParams;

use crate::{catalog::RecommendationKind, dto::views::View, pricing::DiscountCode};

#[derive(Debug, Default, Clone, Copy)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// Only items of this category.
    pub category: Option<String>,
    /// Page number, default 1
    pub page: Option<i64>,
    /// Items per page, default 20
    pub per_page: Option<i64>,
}

impl CatalogQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RecommendationQuery {
    /// Category to recommend from, defaults to the first one.
    pub category: Option<String>,
    #[serde(default)]
    #[param(inline)]
    pub kind: RecommendationKind,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CartQuery {
    /// Discount label or code, e.g. `FOODIE15 (15% off)` or `foodie15`.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub discount: DiscountCode,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ViewQuery {
    /// One of Homepage, Order, Progress, Review, Vendor, AboutUs.
    #[serde(default)]
    #[param(inline)]
    pub page: View,
    pub category: Option<String>,
}
