use crate::{
    dto::tracker::TrackerView,
    error::{AppError, AppResult},
    response::ApiResponse,
    session::{OrderStatus, SessionState},
};

fn status_message(view: &TrackerView) -> String {
    if !view.active {
        "No active order found! Please place an order first.".to_string()
    } else if view.status == OrderStatus::Delivered {
        "Your order has been delivered!".to_string()
    } else {
        view.label.clone()
    }
}

pub fn tracker_view(session: &SessionState) -> ApiResponse<TrackerView> {
    let view = TrackerView::from(&session.tracker);
    ApiResponse::success(status_message(&view), view, None)
}

pub fn advance(session: &mut SessionState) -> AppResult<ApiResponse<TrackerView>> {
    let status = session
        .tracker
        .advance()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    tracing::debug!(status = status.index(), "order status advanced");

    let view = TrackerView::from(&session.tracker);
    Ok(ApiResponse::success(status_message(&view), view, None))
}

pub fn reset(session: &mut SessionState) -> ApiResponse<TrackerView> {
    session.tracker.reset();
    tracing::debug!("order tracking reset");
    ApiResponse::success("Tracking reset", TrackerView::from(&session.tracker), None)
}
