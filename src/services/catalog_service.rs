use crate::{
    catalog::Catalog,
    dto::catalog::{CatalogList, CategoryList},
    error::{AppError, AppResult},
    models::CatalogItem,
    response::{ApiResponse, Meta},
    routes::params::{CatalogQuery, RecommendationQuery},
};

pub fn list_items(catalog: &Catalog, query: CatalogQuery) -> ApiResponse<CatalogList> {
    let (page, limit, offset) = query.pagination().normalize();

    let matching: Vec<&CatalogItem> = match query.category.as_deref().filter(|c| !c.is_empty()) {
        Some(category) => catalog.in_category(category),
        None => catalog.items().iter().collect(),
    };
    let total = matching.len() as i64;

    let items = matching
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(0))
        .cloned()
        .collect();

    let meta = Meta::new(page, limit, total);
    ApiResponse::success("Catalog", CatalogList { items }, Some(meta))
}

pub fn list_categories(catalog: &Catalog) -> ApiResponse<CategoryList> {
    let items: Vec<String> = catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();
    let meta = Meta::total(items.len());
    ApiResponse::success("Categories", CategoryList { items }, Some(meta))
}

pub fn get_item(catalog: &Catalog, name: &str) -> AppResult<ApiResponse<CatalogItem>> {
    let item = catalog.find(name).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Catalog item", item, None))
}

pub fn recommendations(catalog: &Catalog, query: RecommendationQuery) -> ApiResponse<CatalogList> {
    let category = catalog.resolve_category(query.category.as_deref());
    let items = catalog.recommendations(category, query.kind);
    let meta = Meta::total(items.len());
    ApiResponse::success("Curated for you", CatalogList { items }, Some(meta))
}
