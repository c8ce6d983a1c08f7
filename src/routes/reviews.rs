use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::reviews::{RatingChart, ReviewList, SubmitReviewRequest},
    error::AppResult,
    middleware::{extract::{ApiJson, ApiQuery}, session::ShopSession},
    models::Review,
    response::ApiResponse,
    routes::params::CategoryQuery,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reviews).post(submit_review))
        .route("/ratings", get(ratings))
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Reviews submitted in this session", body = ApiResponse<ReviewList>)
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(shop: ShopSession) -> AppResult<Json<ApiResponse<ReviewList>>> {
    Ok(Json(review_service::list_reviews(&shop.state)))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = SubmitReviewRequest,
    responses(
        (status = 200, description = "Review recorded", body = ApiResponse<Review>),
        (status = 400, description = "Missing field or rating outside 1-5"),
    ),
    tag = "Reviews"
)]
pub async fn submit_review(
    mut shop: ShopSession,
    ApiJson(payload): ApiJson<SubmitReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    let resp = review_service::submit_review(&mut shop.state, payload)?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reviews/ratings",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Catalog ratings for a category", body = ApiResponse<RatingChart>)
    ),
    tag = "Reviews"
)]
pub async fn ratings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Json<ApiResponse<RatingChart>> {
    Json(review_service::ratings(&state.catalog, query.category.as_deref()))
}
