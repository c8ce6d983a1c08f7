use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod reviews;
pub mod session;
pub mod tracker;
pub mod vendors;
pub mod views;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .nest("/tracker", tracker::router())
        .nest("/reviews", reviews::router())
        .nest("/vendors", vendors::router())
        .nest("/session", session::router())
        .nest("/views", views::router())
}
