use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::views::PageView,
    error::AppResult,
    middleware::{extract::ApiQuery, session::ShopSession},
    response::ApiResponse,
    routes::params::ViewQuery,
    services::view_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(render_view))
}

#[utoipa::path(
    get,
    path = "/api/views",
    params(ViewQuery),
    responses(
        (status = 200, description = "View model for the selected page plus navigation", body = ApiResponse<PageView>),
        (status = 400, description = "Unknown page")
    ),
    tag = "Views"
)]
pub async fn render_view(
    State(state): State<AppState>,
    shop: ShopSession,
    ApiQuery(query): ApiQuery<ViewQuery>,
) -> AppResult<Json<ApiResponse<PageView>>> {
    let resp = view_service::render_view(&state, &shop.state, query).await?;
    Ok(Json(resp))
}
