use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::catalog::{CatalogList, CategoryList},
    error::AppResult,
    middleware::extract::ApiQuery,
    models::CatalogItem,
    response::ApiResponse,
    routes::params::{CatalogQuery, RecommendationQuery},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items))
        .route("/categories", get(list_categories))
        .route("/items/{name}", get(get_item))
        .route("/recommendations", get(recommendations))
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "List catalog items", body = ApiResponse<CatalogList>)
    ),
    tag = "Catalog"
)]
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CatalogQuery>,
) -> Json<ApiResponse<CatalogList>> {
    Json(catalog_service::list_items(&state.catalog, query))
}

#[utoipa::path(
    get,
    path = "/api/catalog/categories",
    responses(
        (status = 200, description = "Catalog categories in file order", body = ApiResponse<CategoryList>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<CategoryList>> {
    Json(catalog_service::list_categories(&state.catalog))
}

#[utoipa::path(
    get,
    path = "/api/catalog/items/{name}",
    params(
        ("name" = String, Path, description = "Exact item name")
    ),
    responses(
        (status = 200, description = "Catalog item", body = ApiResponse<CatalogItem>),
        (status = 404, description = "Not Found"),
    ),
    tag = "Catalog"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ApiResponse<CatalogItem>>> {
    let resp = catalog_service::get_item(&state.catalog, &name)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/catalog/recommendations",
    params(RecommendationQuery),
    responses(
        (status = 200, description = "Up to three recommended items", body = ApiResponse<CatalogList>)
    ),
    tag = "Catalog"
)]
pub async fn recommendations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RecommendationQuery>,
) -> Json<ApiResponse<CatalogList>> {
    Json(catalog_service::recommendations(&state.catalog, query))
}
