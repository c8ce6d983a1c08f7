use std::sync::Arc;

use crate::{
    catalog::Catalog,
    db::{DbPool, OrmConn, create_orm_conn},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(pool: DbPool, catalog: Catalog) -> Self {
        let orm = create_orm_conn(&pool);
        Self {
            pool,
            orm,
            catalog: Arc::new(catalog),
        }
    }
}
