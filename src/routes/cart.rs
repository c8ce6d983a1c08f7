use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary},
    error::AppResult,
    middleware::{extract::{ApiJson, ApiQuery}, session::ShopSession},
    response::ApiResponse,
    routes::params::CartQuery,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart).post(add_to_cart))
        .route("/{position}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart lines with subtotal and discounted total", body = ApiResponse<CartSummary>),
        (status = 400, description = "Unknown discount code"),
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    shop: ShopSession,
    ApiQuery(query): ApiQuery<CartQuery>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    Ok(Json(cart_service::view_cart(&shop.state, query.discount)))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<CartSummary>),
        (status = 400, description = "Item is not on the menu"),
        (status = 409, description = "Item already in the cart"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    mut shop: ShopSession,
    ApiJson(payload): ApiJson<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let resp = cart_service::add_to_cart(&state.catalog, &mut shop.state, payload)?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{position}",
    params(
        ("position" = usize, Path, description = "Zero-based cart position")
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<CartSummary>),
        (status = 404, description = "No item at that position"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    mut shop: ShopSession,
    Path(position): Path<usize>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let resp = cart_service::remove_from_cart(&mut shop.state, position)?;
    shop.save().await?;
    Ok(Json(resp))
}
