use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CatalogItem;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CatalogList {
    #[schema(value_type = Vec<CatalogItem>)]
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<String>)]
    pub items: Vec<String>,
}
