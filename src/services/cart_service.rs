use crate::{
    catalog::Catalog,
    dto::cart::{AddToCartRequest, CartLine, CartSummary},
    error::{AppError, AppResult},
    pricing::{DiscountCode, apply_discount, format_price},
    response::{ApiResponse, Meta},
    session::SessionState,
};

pub fn cart_summary(session: &SessionState, discount: DiscountCode) -> CartSummary {
    let pricing = apply_discount(session.cart_subtotal(), discount);
    let items = session
        .cart
        .iter()
        .cloned()
        .enumerate()
        .map(|(position, item)| CartLine { position, item })
        .collect();
    CartSummary {
        items,
        display_total: format_price(pricing.total),
        pricing,
    }
}

pub fn view_cart(session: &SessionState, discount: DiscountCode) -> ApiResponse<CartSummary> {
    let summary = cart_summary(session, discount);
    let message = if summary.items.is_empty() {
        "Your cart is empty. Add items from the homepage!".to_string()
    } else if summary.pricing.percent > 0 {
        format!(
            "{}% discount applied! You saved {}",
            summary.pricing.percent,
            format_price(summary.pricing.discount_amount)
        )
    } else {
        "OK".to_string()
    };
    let meta = Meta::total(summary.items.len());
    ApiResponse::success(message, summary, Some(meta))
}

pub fn add_to_cart(
    catalog: &Catalog,
    session: &mut SessionState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartSummary>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Please choose a food item.".to_string()));
    }

    let item = catalog
        .find(name)
        .ok_or_else(|| AppError::BadRequest(format!("{name} is not on the menu")))?;

    if session.cart_contains(&item.name) {
        tracing::warn!(item = %item.name, "duplicate cart item rejected");
        return Err(AppError::Conflict(format!(
            "{} is already in your cart!",
            item.name
        )));
    }

    session.cart.push(item.clone());
    tracing::debug!(item = %item.name, cart_len = session.cart.len(), "added to cart");

    let summary = cart_summary(session, DiscountCode::NoDiscount);
    let meta = Meta::total(summary.items.len());
    Ok(ApiResponse::success(
        format!("{} added to cart!", item.name),
        summary,
        Some(meta),
    ))
}

pub fn remove_from_cart(
    session: &mut SessionState,
    position: usize,
) -> AppResult<ApiResponse<CartSummary>> {
    if position >= session.cart.len() {
        return Err(AppError::NotFound);
    }
    let removed = session.cart.remove(position);
    tracing::debug!(item = %removed.name, position, "removed from cart");

    let summary = cart_summary(session, DiscountCode::NoDiscount);
    let meta = Meta::total(summary.items.len());
    Ok(ApiResponse::success(
        format!("{} removed from cart", removed.name),
        summary,
        Some(meta),
    ))
}
