use chrono::Utc;

use crate::{
    dto::{
        orders::{CheckoutRequest, OrderConfirmation},
        tracker::TrackerView,
    },
    error::{AppError, AppResult},
    models::OrderReceipt,
    pricing::{apply_discount, format_price},
    response::{ApiResponse, Meta},
    session::SessionState,
};

/// Confirm the cart: record a receipt, empty the cart and start tracking.
///
/// Confirming again with a refilled cart simply repeats these steps.
pub fn checkout(
    session: &mut SessionState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderConfirmation>> {
    if session.cart.is_empty() {
        return Err(AppError::BadRequest(
            "Your cart is empty. Add items from the homepage!".into(),
        ));
    }

    let pricing = apply_discount(session.cart_subtotal(), payload.discount);
    let receipt = OrderReceipt {
        items: std::mem::take(&mut session.cart),
        subtotal: pricing.subtotal,
        discount: pricing.discount,
        discount_amount: pricing.discount_amount,
        total: pricing.total,
        placed_at: Utc::now(),
    };

    session.tracker.start();
    session.last_order = Some(receipt.clone());

    tracing::info!(
        items = receipt.items.len(),
        discount = %receipt.discount,
        total = receipt.total,
        "order placed"
    );

    Ok(ApiResponse::success(
        format!(
            "Order placed successfully! Final Amount: {}",
            format_price(receipt.total)
        ),
        OrderConfirmation {
            receipt,
            tracker: TrackerView::from(&session.tracker),
        },
        Some(Meta::empty()),
    ))
}

pub fn last_order(session: &SessionState) -> AppResult<ApiResponse<OrderReceipt>> {
    let receipt = session.last_order.clone().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Last order", receipt, None))
}
