mod common;

use foodflow::{
    dto::vendors::{AddVendorItemRequest, VendorCredentials},
    error::AppError,
    services::vendor_service,
    session::SessionState,
    state::AppState,
};

fn creds(username: &str, password: &str) -> VendorCredentials {
    VendorCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn item(name: &str, cents: i64) -> AddVendorItemRequest {
    AddVendorItemRequest {
        item_name: name.to_string(),
        item_price: cents,
    }
}

async fn count(state: &AppState, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(&state.pool).await.unwrap()
}

async fn logged_in(state: &AppState, username: &str) -> SessionState {
    vendor_service::register_vendor(state, creds(username, "secret"))
        .await
        .unwrap();
    let mut session = SessionState::default();
    vendor_service::login_vendor(state, &mut session, creds(username, "secret"))
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn duplicate_usernames_are_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let created = vendor_service::register_vendor(&state, creds("karachi_grill", "pw1"))
        .await?
        .data
        .unwrap();
    assert_eq!(created.username, "karachi_grill");

    let err = vendor_service::register_vendor(&state, creds("karachi_grill", "pw2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains("already exists")));
    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor").await, 1);

    let err = vendor_service::register_vendor(&state, creds("  ", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn login_requires_matching_credentials() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    vendor_service::register_vendor(&state, creds("shawarma_king", "garlic")).await?;

    let mut session = SessionState::default();
    let err = vendor_service::login_vendor(&state, &mut session, creds("shawarma_king", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("Invalid credentials")));
    assert!(session.vendor.is_none());

    let err = vendor_service::login_vendor(&state, &mut session, creds("nobody", "garlic"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    vendor_service::login_vendor(&state, &mut session, creds("shawarma_king", "garlic")).await?;
    let vendor = session.vendor.clone().unwrap();
    assert_eq!(vendor.username, "shawarma_king");

    vendor_service::logout_vendor(&mut session)?;
    assert!(session.vendor.is_none());
    let err = vendor_service::logout_vendor(&mut session).unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    Ok(())
}

#[tokio::test]
async fn item_management_requires_login() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut session = SessionState::default();

    let err = vendor_service::add_item(&state, &mut session, item("Biryani", 899))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    let err = vendor_service::dashboard(&state, &mut session).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor_items").await, 0);
    Ok(())
}

#[tokio::test]
async fn item_prices_must_be_in_range() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut session = logged_in(&state, "desi_dhaba").await;

    let err = vendor_service::add_item(&state, &mut session, item("Chai", 99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let err = vendor_service::add_item(&state, &mut session, item("Gold Biryani", i64::MAX))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("$1000000.00")));
    let err = vendor_service::add_item(&state, &mut session, item("   ", 500))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let added = vendor_service::add_item(&state, &mut session, item("Chai", 100))
        .await?
        .data
        .unwrap();
    assert_eq!(added.item_price, 100);
    Ok(())
}

#[tokio::test]
async fn deleting_an_item_removes_exactly_that_row() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut session = logged_in(&state, "desi_dhaba").await;

    let mut ids = Vec::new();
    for (name, cents) in [("Biryani", 899), ("Nihari", 1099), ("Lassi", 250)] {
        let added = vendor_service::add_item(&state, &mut session, item(name, cents)).await?;
        ids.push(added.data.unwrap().id);
    }

    let removed = vendor_service::delete_item(&state, &mut session, ids[1]).await?;
    assert_eq!(removed.data.unwrap().item_name, "Nihari");

    let dashboard = vendor_service::dashboard(&state, &mut session).await?.data.unwrap();
    let names: Vec<_> = dashboard.items.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, ["Biryani", "Lassi"]);
    assert_eq!(dashboard.metrics.total_items, 2);
    assert_eq!(dashboard.metrics.total_value, 1149);

    let err = vendor_service::delete_item(&state, &mut session, ids[1])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn vendors_cannot_delete_each_others_items() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut owner = logged_in(&state, "owner").await;
    let mut other = logged_in(&state, "other").await;

    let added = vendor_service::add_item(&state, &mut owner, item("Falafel", 450))
        .await?
        .data
        .unwrap();

    let err = vendor_service::delete_item(&state, &mut other, added.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor_items").await, 1);

    let other_dashboard = vendor_service::dashboard(&state, &mut other).await?;
    assert_eq!(other_dashboard.message, "No items added yet.");
    assert!(other_dashboard.data.unwrap().items.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_an_account_removes_its_items() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut leaving = logged_in(&state, "leaving").await;
    let mut staying = logged_in(&state, "staying").await;

    vendor_service::add_item(&state, &mut leaving, item("Samosa", 150)).await?;
    vendor_service::add_item(&state, &mut leaving, item("Pakora", 200)).await?;
    vendor_service::add_item(&state, &mut staying, item("Kunafa", 350)).await?;

    vendor_service::delete_account(&state, &mut leaving).await?;
    assert!(leaving.vendor.is_none());

    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor").await, 1);
    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor_items").await, 1);

    let err = vendor_service::login_vendor(&state, &mut leaving, creds("leaving", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[test]
fn metrics_sum_prices() {
    use foodflow::models::VendorItem;

    let items: Vec<VendorItem> = [("Biryani", 899), ("Lassi", 250)]
        .into_iter()
        .enumerate()
        .map(|(i, (name, price))| VendorItem {
            id: i as i64 + 1,
            vendor_id: 1,
            item_name: name.to_string(),
            item_price: price,
        })
        .collect();

    let metrics = vendor_service::compute_metrics(&items);
    assert_eq!(metrics.total_items, 2);
    assert_eq!(metrics.total_value, 1149);
    assert_eq!(vendor_service::compute_metrics(&[]).total_value, 0);
}

#[tokio::test]
async fn a_deleted_account_logs_out_its_other_sessions() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let mut first = logged_in(&state, "shared").await;
    let mut second = SessionState::default();
    vendor_service::login_vendor(&state, &mut second, creds("shared", "secret")).await?;

    vendor_service::delete_account(&state, &mut first).await?;

    let err = vendor_service::add_item(&state, &mut second, item("Haleem", 700))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(ref msg) if msg.contains("no longer exists")));
    assert!(second.vendor.is_none());
    assert_eq!(count(&state, "SELECT COUNT(*) FROM vendor_items").await, 0);

    second.vendor = Some(foodflow::models::VendorAccount {
        id: 1,
        username: "shared".into(),
    });
    let err = vendor_service::dashboard(&state, &mut second).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
    assert!(second.vendor.is_none());
    Ok(())
}
