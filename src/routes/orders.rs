use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{
    dto::orders::{CheckoutRequest, OrderConfirmation},
    error::AppResult,
    middleware::{extract::ApiJson, session::ShopSession},
    models::OrderReceipt,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/last", get(last_order))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed, cart cleared, tracking started", body = ApiResponse<OrderConfirmation>),
        (status = 400, description = "Cart is empty"),
    ),
    tag = "Orders"
)]
pub async fn checkout(
    mut shop: ShopSession,
    ApiJson(payload): ApiJson<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<OrderConfirmation>>> {
    let resp = order_service::checkout(&mut shop.state, payload)?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/last",
    responses(
        (status = 200, description = "Most recent receipt of this session", body = ApiResponse<OrderReceipt>),
        (status = 404, description = "No order placed yet"),
    ),
    tag = "Orders"
)]
pub async fn last_order(shop: ShopSession) -> AppResult<Json<ApiResponse<OrderReceipt>>> {
    let resp = order_service::last_order(&shop.state)?;
    Ok(Json(resp))
}
