use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::vendors::{AddVendorItemRequest, VendorCredentials, VendorDashboard, VendorMetrics},
    entity::{
        vendor::Entity as Vendors,
        vendor_items::{
            ActiveModel as VendorItemActive, Column as ItemCol, Entity as VendorItems,
            Model as VendorItemModel,
        },
    },
    error::{AppError, AppResult},
    middleware::auth::require_vendor,
    models::{Vendor, VendorAccount, VendorItem},
    pricing::{MAX_PRICE, format_price},
    response::{ApiResponse, Meta},
    session::SessionState,
    state::AppState,
};

/// Smallest price a vendor may list, in cents.
pub const MIN_ITEM_PRICE: i64 = 100;

const ACCOUNT_GONE: &str = "Your vendor account no longer exists. Please log in again.";

pub async fn vendor_exists(state: &AppState, vendor_id: i64) -> AppResult<bool> {
    let count = Vendors::find_by_id(vendor_id).count(&state.orm).await?;
    Ok(count > 0)
}

/// The session's vendor, provided the account is still in the store. A stale
/// login is dropped from the session.
async fn live_vendor(state: &AppState, session: &mut SessionState) -> AppResult<VendorAccount> {
    let vendor = require_vendor(session)?;
    if !vendor_exists(state, vendor.id).await? {
        session.vendor = None;
        tracing::warn!(vendor_id = vendor.id, "session vendor no longer exists");
        return Err(AppError::Unauthorized(ACCOUNT_GONE.into()));
    }
    Ok(vendor)
}

pub async fn register_vendor(
    state: &AppState,
    payload: VendorCredentials,
) -> AppResult<ApiResponse<Vendor>> {
    let VendorCredentials { username, password } = payload;
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "Please enter both a username and a password.".into(),
        ));
    }

    // The unique constraint on vendor.username is the only duplicate check.
    let vendor: Vendor = sqlx::query_as(
        "INSERT INTO vendor (username, password) VALUES (?, ?) RETURNING id, username, password",
    )
    .bind(username)
    .bind(password.as_str())
    .fetch_one(&state.pool)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
            "Username already exists. Choose a different one.".into(),
        ),
        other => AppError::DbError(other),
    })?;

    tracing::info!(vendor_id = vendor.id, username = %vendor.username, "vendor registered");
    Ok(ApiResponse::success(
        "Account registered successfully! You can now log in.",
        vendor,
        None,
    ))
}

pub async fn login_vendor(
    state: &AppState,
    session: &mut SessionState,
    payload: VendorCredentials,
) -> AppResult<ApiResponse<VendorAccount>> {
    let VendorCredentials { username, password } = payload;
    let row: Option<(i64, String)> =
        sqlx::query_as("SELECT id, username FROM vendor WHERE username = ? AND password = ?")
            .bind(username.trim())
            .bind(password.as_str())
            .fetch_optional(&state.pool)
            .await?;

    let (id, username) = match row {
        Some(row) => row,
        None => {
            tracing::info!(username = %username.trim(), "vendor login rejected");
            return Err(AppError::BadRequest(
                "Invalid credentials. Please try again.".into(),
            ));
        }
    };

    let account = VendorAccount { id, username };
    session.vendor = Some(account.clone());
    tracing::info!(vendor_id = account.id, "vendor logged in");

    Ok(ApiResponse::success(
        format!("Welcome, {}!", account.username),
        account,
        Some(Meta::empty()),
    ))
}

pub fn logout_vendor(session: &mut SessionState) -> AppResult<ApiResponse<VendorAccount>> {
    let account = require_vendor(session)?;
    session.vendor = None;
    tracing::info!(vendor_id = account.id, "vendor logged out");
    Ok(ApiResponse::success("Logged out", account, None))
}

/// Delete the logged-in vendor's account; its items go with it.
pub async fn delete_account(
    state: &AppState,
    session: &mut SessionState,
) -> AppResult<ApiResponse<VendorAccount>> {
    let account = live_vendor(state, session).await?;
    let result = Vendors::delete_by_id(account.id).exec(&state.orm).await?;
    session.vendor = None;
    if result.rows_affected == 0 {
        return Err(AppError::Unauthorized(ACCOUNT_GONE.into()));
    }

    tracing::info!(vendor_id = account.id, "vendor account deleted");
    Ok(ApiResponse::success("Account deleted", account, None))
}

pub async fn list_items(state: &AppState, vendor_id: i64) -> AppResult<Vec<VendorItem>> {
    let items = VendorItems::find()
        .filter(ItemCol::VendorId.eq(vendor_id))
        .order_by_asc(ItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(vendor_item_from_entity)
        .collect();
    Ok(items)
}

pub fn compute_metrics(items: &[VendorItem]) -> VendorMetrics {
    VendorMetrics {
        total_items: items.len(),
        total_value: items.iter().map(|item| item.item_price).sum(),
    }
}

pub async fn load_dashboard(state: &AppState, vendor: VendorAccount) -> AppResult<VendorDashboard> {
    let items = list_items(state, vendor.id).await?;
    let metrics = compute_metrics(&items);
    Ok(VendorDashboard {
        vendor,
        items,
        metrics,
    })
}

pub async fn dashboard(
    state: &AppState,
    session: &mut SessionState,
) -> AppResult<ApiResponse<VendorDashboard>> {
    let vendor = live_vendor(state, session).await?;
    let dashboard = load_dashboard(state, vendor).await?;
    let message = if dashboard.items.is_empty() {
        "No items added yet."
    } else {
        "Your items"
    };
    let meta = Meta::total(dashboard.items.len());
    Ok(ApiResponse::success(message, dashboard, Some(meta)))
}

pub async fn add_item(
    state: &AppState,
    session: &mut SessionState,
    payload: AddVendorItemRequest,
) -> AppResult<ApiResponse<VendorItem>> {
    let vendor = live_vendor(state, session).await?;
    let item_name = payload.item_name.trim();
    if item_name.is_empty() {
        return Err(AppError::BadRequest("Please enter an item name.".into()));
    }
    if payload.item_price < MIN_ITEM_PRICE {
        return Err(AppError::BadRequest("Price must be at least $1.00.".into()));
    }
    if payload.item_price > MAX_PRICE {
        return Err(AppError::BadRequest(format!(
            "Price must be at most {}.",
            format_price(MAX_PRICE)
        )));
    }

    let item = VendorItemActive {
        id: NotSet,
        vendor_id: Set(vendor.id),
        item_name: Set(item_name.to_string()),
        item_price: Set(payload.item_price),
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match err.sql_err() {
        // The account was deleted between the check and the insert.
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            session.vendor = None;
            AppError::Unauthorized(ACCOUNT_GONE.into())
        }
        _ => AppError::from(err),
    })?;

    tracing::info!(vendor_id = vendor.id, item_id = item.id, "vendor item added");
    Ok(ApiResponse::success(
        format!("Item '{}' added successfully!", item.item_name),
        vendor_item_from_entity(item),
        Some(Meta::empty()),
    ))
}

/// Remove one of the logged-in vendor's items. Other vendors' rows are never
/// touched, even when the id exists.
pub async fn delete_item(
    state: &AppState,
    session: &mut SessionState,
    id: i64,
) -> AppResult<ApiResponse<VendorItem>> {
    let vendor = live_vendor(state, session).await?;
    let existing = VendorItems::find_by_id(id)
        .filter(ItemCol::VendorId.eq(vendor.id))
        .one(&state.orm)
        .await?;
    let existing = match existing {
        Some(item) => item,
        None => return Err(AppError::NotFound),
    };

    let result = VendorItems::delete_many()
        .filter(ItemCol::Id.eq(id))
        .filter(ItemCol::VendorId.eq(vendor.id))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(vendor_id = vendor.id, item_id = id, "vendor item removed");
    Ok(ApiResponse::success(
        format!("{} removed successfully!", existing.item_name),
        vendor_item_from_entity(existing),
        Some(Meta::empty()),
    ))
}

fn vendor_item_from_entity(model: VendorItemModel) -> VendorItem {
    VendorItem {
        id: model.id,
        vendor_id: model.vendor_id,
        item_name: model.item_name,
        item_price: model.item_price,
    }
}
