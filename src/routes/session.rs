use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::session::SessionSummary,
    error::AppResult,
    middleware::session::ShopSession,
    response::{ApiResponse, Meta},
    services::session_service,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionEnded {
    pub ended: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(session_summary).delete(end_session))
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "What this session currently holds", body = ApiResponse<SessionSummary>)
    ),
    tag = "Session"
)]
pub async fn session_summary(shop: ShopSession) -> AppResult<Json<ApiResponse<SessionSummary>>> {
    Ok(Json(session_service::summary(&shop.state)))
}

#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 200, description = "Cart, tracker, reviews and vendor login discarded", body = ApiResponse<SessionEnded>)
    ),
    tag = "Session"
)]
pub async fn end_session(shop: ShopSession) -> AppResult<Json<ApiResponse<SessionEnded>>> {
    shop.end().await?;
    Ok(Json(ApiResponse::success(
        "Session ended",
        SessionEnded { ended: true },
        Some(Meta::empty()),
    )))
}
