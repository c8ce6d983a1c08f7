#![allow(dead_code)]

use foodflow::{
    catalog::Catalog,
    db::{create_pool, run_migrations},
    state::AppState,
};

pub const CATALOG_CSV: &str = "\
 Name , Price ,Desc, CATEGORY ,Review
Burger,$5.00,Grilled beef patty,Fast Food,4.4
Fries,$2.00,Crispy salted fries,Fast Food,4.1
Zinger Wrap,$4.75,Crunchy chicken wrap,Fast Food,4.2
Chicken Shawarma,$5.50,Garlic sauce in pita,Arabic,4.7
Falafel Plate,$6.00,Chickpea fritters,Arabic,4.0
Kunafa,$3.50,Sweet cheese pastry,Dessert,4.5
";

pub fn catalog() -> Catalog {
    Catalog::from_reader(CATALOG_CSV.as_bytes()).expect("test catalog parses")
}

pub async fn setup_state() -> anyhow::Result<AppState> {
    let pool = create_pool("sqlite::memory:").await?;
    run_migrations(&pool).await?;
    Ok(AppState::new(pool, catalog()))
}
