use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use crate::{
    dto::vendors::{AddVendorItemRequest, VendorCredentials, VendorDashboard},
    error::AppResult,
    middleware::{extract::ApiJson, session::ShopSession},
    models::{Vendor, VendorAccount, VendorItem},
    response::ApiResponse,
    services::vendor_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", delete(delete_account))
        .route("/items", get(dashboard).post(add_item))
        .route("/items/{id}", delete(delete_item))
}

#[utoipa::path(
    post,
    path = "/api/vendors/register",
    request_body = VendorCredentials,
    responses(
        (status = 200, description = "Vendor registered", body = ApiResponse<Vendor>),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already exists"),
    ),
    tag = "Vendors"
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VendorCredentials>,
) -> AppResult<Json<ApiResponse<Vendor>>> {
    let resp = vendor_service::register_vendor(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/vendors/login",
    request_body = VendorCredentials,
    responses(
        (status = 200, description = "Logged in on this session", body = ApiResponse<VendorAccount>),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Vendors"
)]
pub async fn login(
    State(state): State<AppState>,
    mut shop: ShopSession,
    ApiJson(payload): ApiJson<VendorCredentials>,
) -> AppResult<Json<ApiResponse<VendorAccount>>> {
    let resp = vendor_service::login_vendor(&state, &mut shop.state, payload).await?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/vendors/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<VendorAccount>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Vendors"
)]
pub async fn logout(mut shop: ShopSession) -> AppResult<Json<ApiResponse<VendorAccount>>> {
    let resp = vendor_service::logout_vendor(&mut shop.state)?;
    shop.save().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/vendors/me",
    responses(
        (status = 200, description = "Account and its items deleted", body = ApiResponse<VendorAccount>),
        (status = 401, description = "Not logged in, or the account no longer exists")
    ),
    tag = "Vendors"
)]
pub async fn delete_account(
    State(state): State<AppState>,
    mut shop: ShopSession,
) -> AppResult<Json<ApiResponse<VendorAccount>>> {
    let resp = vendor_service::delete_account(&state, &mut shop.state).await;
    shop.save().await?;
    Ok(Json(resp?))
}

#[utoipa::path(
    get,
    path = "/api/vendors/items",
    responses(
        (status = 200, description = "Vendor items with count and total value", body = ApiResponse<VendorDashboard>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Vendors"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    mut shop: ShopSession,
) -> AppResult<Json<ApiResponse<VendorDashboard>>> {
    let resp = vendor_service::dashboard(&state, &mut shop.state).await;
    shop.save().await?;
    Ok(Json(resp?))
}

#[utoipa::path(
    post,
    path = "/api/vendors/items",
    request_body = AddVendorItemRequest,
    responses(
        (status = 200, description = "Item listed", body = ApiResponse<VendorItem>),
        (status = 400, description = "Missing name or price below $1.00"),
        (status = 401, description = "Not logged in")
    ),
    tag = "Vendors"
)]
pub async fn add_item(
    State(state): State<AppState>,
    mut shop: ShopSession,
    ApiJson(payload): ApiJson<AddVendorItemRequest>,
) -> AppResult<Json<ApiResponse<VendorItem>>> {
    let resp = vendor_service::add_item(&state, &mut shop.state, payload).await;
    shop.save().await?;
    Ok(Json(resp?))
}

#[utoipa::path(
    delete,
    path = "/api/vendors/items/{id}",
    params(
        ("id" = i64, Path, description = "Vendor item ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<VendorItem>),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such item for this vendor")
    ),
    tag = "Vendors"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    mut shop: ShopSession,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<VendorItem>>> {
    let resp = vendor_service::delete_item(&state, &mut shop.state, id).await;
    shop.save().await?;
    Ok(Json(resp?))
}
