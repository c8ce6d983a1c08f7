mod common;

use foodflow::{
    dto::{cart::AddToCartRequest, orders::CheckoutRequest, reviews::SubmitReviewRequest},
    error::AppError,
    pricing::DiscountCode,
    services::{cart_service, order_service, review_service, tracker_service},
    session::{OrderStatus, SessionState},
};

fn add(name: &str) -> AddToCartRequest {
    AddToCartRequest {
        name: name.to_string(),
    }
}

#[test]
fn burger_and_fries_with_foodie15_costs_595() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    cart_service::add_to_cart(&catalog, &mut session, add("Burger")).unwrap();
    cart_service::add_to_cart(&catalog, &mut session, add("Fries")).unwrap();

    let discount: DiscountCode = "FOODIE15 (15% off)".parse().unwrap();
    let summary = cart_service::view_cart(&session, discount).data.unwrap();
    assert_eq!(summary.pricing.subtotal, 700);
    assert_eq!(summary.pricing.total, 595);
    assert_eq!(summary.display_total, "$5.95");
    assert_eq!(summary.items[1].position, 1);
    assert_eq!(summary.items[1].item.name, "Fries");
}

#[test]
fn adding_the_same_item_twice_is_rejected() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    cart_service::add_to_cart(&catalog, &mut session, add("Burger")).unwrap();
    let err = cart_service::add_to_cart(&catalog, &mut session, add("Burger")).unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains("already in your cart")));
    assert_eq!(session.cart.len(), 1);
}

#[test]
fn unknown_items_are_not_added() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    let err = cart_service::add_to_cart(&catalog, &mut session, add("Pizza")).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let err = cart_service::add_to_cart(&catalog, &mut session, add("  ")).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(session.cart.is_empty());
}

#[test]
fn remove_by_position_keeps_the_rest_in_order() {
    let catalog = common::catalog();
    let mut session = SessionState::default();
    for name in ["Burger", "Fries", "Kunafa"] {
        cart_service::add_to_cart(&catalog, &mut session, add(name)).unwrap();
    }

    let resp = cart_service::remove_from_cart(&mut session, 1).unwrap();
    let names: Vec<_> = session.cart.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Burger", "Kunafa"]);
    assert_eq!(resp.data.unwrap().pricing.subtotal, 850);

    let err = cart_service::remove_from_cart(&mut session, 2).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(session.cart.len(), 2);
}

#[test]
fn checkout_clears_cart_and_starts_tracking() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    let err = order_service::checkout(&mut session, CheckoutRequest::default()).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(session.tracker.status().index(), 0);

    cart_service::add_to_cart(&catalog, &mut session, add("Burger")).unwrap();
    cart_service::add_to_cart(&catalog, &mut session, add("Fries")).unwrap();

    let confirmation = order_service::checkout(
        &mut session,
        CheckoutRequest {
            discount: DiscountCode::Vip20,
        },
    )
    .unwrap()
    .data
    .unwrap();

    assert_eq!(confirmation.receipt.total, 560);
    assert_eq!(confirmation.receipt.items.len(), 2);
    assert_eq!(confirmation.tracker.index, 1);
    assert!(confirmation.tracker.track_available);
    assert!(session.cart.is_empty());
    assert_eq!(session.tracker.status(), OrderStatus::Preparing);

    let last = order_service::last_order(&session).unwrap().data.unwrap();
    assert_eq!(last.discount, DiscountCode::Vip20);
}

#[test]
fn reordering_restarts_tracking_at_step_one() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    cart_service::add_to_cart(&catalog, &mut session, add("Kunafa")).unwrap();
    order_service::checkout(&mut session, CheckoutRequest::default()).unwrap();
    tracker_service::advance(&mut session).unwrap();
    assert_eq!(session.tracker.status().index(), 2);

    cart_service::add_to_cart(&catalog, &mut session, add("Kunafa")).unwrap();
    order_service::checkout(&mut session, CheckoutRequest::default()).unwrap();
    assert_eq!(session.tracker.status().index(), 1);
}

#[test]
fn tracker_moves_one_step_at_a_time() {
    let catalog = common::catalog();
    let mut session = SessionState::default();

    let err = tracker_service::advance(&mut session).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("No active order")));

    cart_service::add_to_cart(&catalog, &mut session, add("Fries")).unwrap();
    order_service::checkout(&mut session, CheckoutRequest::default()).unwrap();

    let mut seen = vec![session.tracker.status().index()];
    while let Ok(resp) = tracker_service::advance(&mut session) {
        seen.push(resp.data.unwrap().index);
    }
    assert_eq!(seen, [1, 2, 3]);

    let view = tracker_service::tracker_view(&session);
    assert_eq!(view.message, "Your order has been delivered!");
    assert_eq!(view.data.unwrap().label, "Delivered");

    let reset = tracker_service::reset(&mut session).data.unwrap();
    assert_eq!(reset.index, 0);
    assert!(!reset.track_available);
}

#[test]
fn reviews_require_every_field() {
    let mut session = SessionState::default();
    let review = |name: &str, rating: u8, comment: &str| SubmitReviewRequest {
        name: name.to_string(),
        food: "Burger".to_string(),
        rating,
        comment: comment.to_string(),
    };

    let err = review_service::submit_review(&mut session, review(" ", 4, "Tasty")).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let err = review_service::submit_review(&mut session, review("Aisha", 4, "")).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    let err = review_service::submit_review(&mut session, review("Aisha", 6, "Tasty")).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(session.reviews.is_empty());

    review_service::submit_review(&mut session, review("Aisha", 5, "Tasty")).unwrap();
    review_service::submit_review(&mut session, review("Omar", 3, "A bit dry")).unwrap();

    let list = review_service::list_reviews(&session).data.unwrap();
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].name, "Aisha");
    assert_eq!(list.items[1].rating, 3);
}

#[test]
fn rating_chart_follows_selected_category() {
    let catalog = common::catalog();
    let chart = review_service::rating_chart(&catalog, Some("Arabic"));
    assert_eq!(chart.category.as_deref(), Some("Arabic"));
    let bars: Vec<_> = chart.bars.iter().map(|b| (b.name.as_str(), b.rating)).collect();
    assert_eq!(
        bars,
        [("Chicken Shawarma", Some(4.7)), ("Falafel Plate", Some(4.0))]
    );
}
