use chrono::Utc;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    dto::reviews::{RatingBar, RatingChart, ReviewList, SubmitReviewRequest},
    error::{AppError, AppResult},
    models::Review,
    response::{ApiResponse, Meta},
    session::SessionState,
};

pub fn submit_review(
    session: &mut SessionState,
    payload: SubmitReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    let name = payload.name.trim();
    let food = payload.food.trim();
    let comment = payload.comment.trim();
    if name.is_empty() || food.is_empty() || comment.is_empty() {
        return Err(AppError::BadRequest(
            "Please fill out all fields before submitting.".into(),
        ));
    }
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::BadRequest("Rating must be between 1 and 5.".into()));
    }

    let review = Review {
        id: Uuid::new_v4(),
        name: name.to_string(),
        food: food.to_string(),
        rating: payload.rating,
        comment: comment.to_string(),
        submitted_at: Utc::now(),
    };
    session.reviews.push(review.clone());

    Ok(ApiResponse::success(
        "Thank you for your feedback!",
        review,
        Some(Meta::total(session.reviews.len())),
    ))
}

pub fn list_reviews(session: &SessionState) -> ApiResponse<ReviewList> {
    let items = session.reviews.clone();
    let meta = Meta::total(items.len());
    ApiResponse::success("User reviews", ReviewList { items }, Some(meta))
}

/// Catalog ratings for one category, in catalog order.
pub fn rating_chart(catalog: &Catalog, category: Option<&str>) -> RatingChart {
    let category = catalog.resolve_category(category);
    let bars: Vec<RatingBar> = category
        .map(|category| {
            catalog
                .in_category(category)
                .into_iter()
                .map(|item| RatingBar {
                    name: item.name.clone(),
                    rating: item.rating,
                })
                .collect()
        })
        .unwrap_or_default();
    RatingChart {
        category: category.map(str::to_string),
        bars,
    }
}

pub fn ratings(catalog: &Catalog, category: Option<&str>) -> ApiResponse<RatingChart> {
    let chart = rating_chart(catalog, category);
    let meta = Meta::total(chart.bars.len());
    ApiResponse::success("Review distribution", chart, Some(meta))
}
