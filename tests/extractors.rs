use axum::{
    body::{Body, to_bytes},
    extract::{FromRequest, FromRequestParts},
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use foodflow::{
    dto::orders::CheckoutRequest,
    error::AppError,
    middleware::extract::{ApiJson, ApiQuery},
    pricing::DiscountCode,
    routes::params::CartQuery,
};

async fn cart_query(uri: &str) -> Result<CartQuery, AppError> {
    let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
    ApiQuery::<CartQuery>::from_request_parts(&mut parts, &())
        .await
        .map(|ApiQuery(query)| query)
}

#[tokio::test]
async fn discount_query_accepts_codes_and_labels() {
    let query = cart_query("/api/cart?discount=foodie15").await.unwrap();
    assert_eq!(query.discount, DiscountCode::Foodie15);

    let query = cart_query("/api/cart?discount=VIP20%20(20%25%20off)").await.unwrap();
    assert_eq!(query.discount, DiscountCode::Vip20);

    let query = cart_query("/api/cart").await.unwrap();
    assert_eq!(query.discount, DiscountCode::NoDiscount);
}

#[tokio::test]
async fn unknown_discount_is_a_bad_request_in_the_envelope() {
    let err = cart_query("/api/cart?discount=FREE100").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("unknown discount code")));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["message"].as_str().unwrap().contains("FREE100"));
    assert!(body["data"]["error"].is_string());
}

#[tokio::test]
async fn malformed_checkout_body_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"discount":"HALF_OFF"}"#))
        .unwrap();
    let err = ApiJson::<CheckoutRequest>::from_request(request, &())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("HALF_OFF")));

    let request = Request::builder()
        .method("POST")
        .uri("/api/orders/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"discount":"halal10"}"#))
        .unwrap();
    let ApiJson(checkout) = ApiJson::<CheckoutRequest>::from_request(request, &())
        .await
        .unwrap();
    assert_eq!(checkout.discount, DiscountCode::Halal10);
}
