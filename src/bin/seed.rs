use foodflow::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let vendor_id = ensure_vendor(&pool, "demo", "demo123").await?;
    seed_items(&pool, vendor_id).await?;

    println!("Seed completed. Demo vendor ID: {vendor_id}");
    Ok(())
}

async fn ensure_vendor(pool: &DbPool, username: &str, password: &str) -> anyhow::Result<i64> {
    sqlx::query("INSERT INTO vendor (username, password) VALUES (?, ?) ON CONFLICT (username) DO NOTHING")
        .bind(username)
        .bind(password)
        .execute(pool)
        .await?;

    let (id,): (i64,) = sqlx::query_as("SELECT id FROM vendor WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;

    println!("Ensured vendor {username}");
    Ok(id)
}

async fn seed_items(pool: &DbPool, vendor_id: i64) -> anyhow::Result<()> {
    let (existing,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM vendor_items WHERE vendor_id = ?")
            .bind(vendor_id)
            .fetch_one(pool)
            .await?;
    if existing > 0 {
        println!("Vendor already has {existing} items, skipping");
        return Ok(());
    }

    let items = vec![
        ("Seekh Kebab Roll", 450),
        ("Mango Lassi", 250),
        ("Chicken Karahi", 1200),
    ];

    for (name, price) in items {
        sqlx::query("INSERT INTO vendor_items (vendor_id, item_name, item_price) VALUES (?, ?, ?)")
            .bind(vendor_id)
            .bind(name)
            .bind(price as i64)
            .execute(pool)
            .await?;
    }

    println!("Seeded vendor items");
    Ok(())
}
