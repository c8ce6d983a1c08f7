use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{
    dto::tracker::TrackerView,
    error::AppResult,
    middleware::session::ShopSession,
    response::ApiResponse,
    services::tracker_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracker_view))
        .route("/advance", post(advance))
        .route("/reset", post(reset))
}

#[utoipa::path(
    get,
    path = "/api/tracker",
    responses(
        (status = 200, description = "Current delivery status", body = ApiResponse<TrackerView>)
    ),
    tag = "Tracker"
)]
pub async fn tracker_view(shop: ShopSession) -> AppResult<Json<ApiResponse<TrackerView>>> {
    Ok(Json(tracker_service::tracker_view(&shop.state)))
}

#[utoipa::path(
    post,
    path = "/api/tracker/advance",
    responses(
        (status = 200, description = "Moved one step forward", body = ApiResponse<TrackerView>),
        (status = 400, description = "No active order, or already delivered"),
    ),
    tag = "Tracker"
)]
pub async fn advance(mut shop: ShopSession) -> AppResult<Json<ApiResponse<TrackerView>>> {
    let resp = tracker_service::advance(&mut shop.state)?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/tracker/reset",
    responses(
        (status = 200, description = "Tracking reset to 0", body = ApiResponse<TrackerView>)
    ),
    tag = "Tracker"
)]
pub async fn reset(mut shop: ShopSession) -> AppResult<Json<ApiResponse<TrackerView>>> {
    let resp = tracker_service::reset(&mut shop.state);
    shop.save().await?;
    Ok(Json(resp))
}
