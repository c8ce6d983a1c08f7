use crate::{dto::session::SessionSummary, response::ApiResponse, session::SessionState};

pub fn summary(session: &SessionState) -> ApiResponse<SessionSummary> {
    let data = SessionSummary {
        cart_items: session.cart.len(),
        cart_subtotal: session.cart_subtotal(),
        order_status: session.tracker.status(),
        reviews: session.reviews.len(),
        vendor: session.vendor.as_ref().map(|v| v.username.clone()),
    };
    ApiResponse::success("Session", data, None)
}
