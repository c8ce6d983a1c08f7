use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::RecommendationKind,
    dto::{
        cart::{AddToCartRequest, CartLine, CartSummary},
        catalog::{CatalogList, CategoryList},
        orders::{CheckoutRequest, OrderConfirmation},
        reviews::{RatingBar, RatingChart, ReviewList, SubmitReviewRequest},
        session::SessionSummary,
        tracker::TrackerView,
        vendors::{AddVendorItemRequest, VendorCredentials, VendorDashboard, VendorMetrics},
        views::{NavLink, PageView, View},
    },
    models::{CatalogItem, OrderReceipt, Review, Vendor, VendorAccount, VendorItem},
    pricing::{DiscountBreakdown, DiscountCode},
    response::{ApiResponse, Meta},
    routes::{cart, catalog, health, orders, reviews, session, tracker, vendors, views},
    session::{OrderStatus, SESSION_COOKIE},
};

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::list_items,
        catalog::list_categories,
        catalog::get_item,
        catalog::recommendations,
        cart::view_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::checkout,
        orders::last_order,
        tracker::tracker_view,
        tracker::advance,
        tracker::reset,
        reviews::list_reviews,
        reviews::submit_review,
        reviews::ratings,
        vendors::register,
        vendors::login,
        vendors::logout,
        vendors::delete_account,
        vendors::dashboard,
        vendors::add_item,
        vendors::delete_item,
        session::session_summary,
        session::end_session,
        views::render_view
    ),
    components(
        schemas(
            CatalogItem,
            CatalogList,
            CategoryList,
            RecommendationKind,
            AddToCartRequest,
            CartLine,
            CartSummary,
            DiscountCode,
            DiscountBreakdown,
            CheckoutRequest,
            OrderConfirmation,
            OrderReceipt,
            OrderStatus,
            TrackerView,
            Review,
            ReviewList,
            SubmitReviewRequest,
            RatingBar,
            RatingChart,
            Vendor,
            VendorAccount,
            VendorItem,
            VendorCredentials,
            AddVendorItemRequest,
            VendorMetrics,
            VendorDashboard,
            SessionSummary,
            session::SessionEnded,
            View,
            NavLink,
            PageView,
            Meta,
            ApiResponse<CatalogItem>,
            ApiResponse<CartSummary>,
            ApiResponse<OrderConfirmation>,
            ApiResponse<TrackerView>,
            ApiResponse<VendorDashboard>
        )
    ),
    security(
        ("session_cookie" = [])
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Food catalog endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Orders", description = "Checkout endpoints"),
        (name = "Tracker", description = "Delivery status endpoints"),
        (name = "Reviews", description = "Review endpoints"),
        (name = "Vendors", description = "Vendor account and listing endpoints"),
        (name = "Session", description = "Session lifecycle endpoints"),
        (name = "Views", description = "Page view models"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
