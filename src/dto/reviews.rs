use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Review;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewRequest {
    pub name: String,
    pub food: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ReviewList {
    #[schema(value_type = Vec<Review>)]
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingBar {
    pub name: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingChart {
    pub category: Option<String>,
    pub bars: Vec<RatingBar>,
}
