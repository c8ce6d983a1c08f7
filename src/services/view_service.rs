use crate::{
    catalog::RecommendationKind,
    dto::{
        tracker::TrackerView,
        views::{
            AboutSection, AboutUsView, HomepageView, NavLink, OrderView, PageView, ReviewView,
            VendorView, View, ViewContent,
        },
    },
    error::AppResult,
    models::CatalogItem,
    pricing::DiscountCode,
    response::{ApiResponse, Meta},
    routes::params::ViewQuery,
    services::{cart_service, review_service, vendor_service},
    session::SessionState,
    state::AppState,
};

pub fn navigation() -> Vec<NavLink> {
    View::ALL
        .into_iter()
        .map(|view| NavLink {
            view,
            title: view.title().to_string(),
            href: view.href(),
        })
        .collect()
}

pub async fn render_view(
    state: &AppState,
    session: &SessionState,
    query: ViewQuery,
) -> AppResult<ApiResponse<PageView>> {
    let category = query.category.as_deref();
    let content = match query.page {
        View::Homepage => ViewContent::Homepage(homepage(state, category)),
        View::Order => ViewContent::Order(OrderView {
            cart: cart_service::cart_summary(session, DiscountCode::NoDiscount),
            discount_options: DiscountCode::ALL.to_vec(),
            track_available: session.tracker.track_available(),
        }),
        View::Progress => ViewContent::Progress(TrackerView::from(&session.tracker)),
        View::Review => ViewContent::Review(ReviewView {
            categories: categories(state),
            chart: review_service::rating_chart(&state.catalog, category),
            reviews: session.reviews.clone(),
        }),
        View::Vendor => {
            let mut dashboard = None;
            if let Some(vendor) = session.vendor.clone() {
                if vendor_service::vendor_exists(state, vendor.id).await? {
                    dashboard = Some(vendor_service::load_dashboard(state, vendor).await?);
                }
            }
            ViewContent::Vendor(VendorView { dashboard })
        }
        View::AboutUs => ViewContent::AboutUs(about_us()),
    };

    Ok(ApiResponse::success(
        query.page.title(),
        PageView {
            view: query.page,
            nav: navigation(),
            content,
        },
        Some(Meta::empty()),
    ))
}

fn categories(state: &AppState) -> Vec<String> {
    state
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn homepage(state: &AppState, requested: Option<&str>) -> HomepageView {
    let catalog = &state.catalog;
    let selected = catalog.resolve_category(requested);
    let items: Vec<CatalogItem> = selected
        .map(|category| catalog.in_category(category).into_iter().cloned().collect())
        .unwrap_or_default();
    let recommendations = match selected {
        Some(category) => catalog.recommendations(Some(category), RecommendationKind::TopRated),
        None => Vec::new(),
    };

    HomepageView {
        categories: categories(state),
        selected_category: selected.map(str::to_string),
        items,
        recommendations,
    }
}

fn about_us() -> AboutUsView {
    let section = |heading: &str, points: &[&str]| AboutSection {
        heading: heading.to_string(),
        points: points.iter().map(|p| p.to_string()).collect(),
    };

    AboutUsView {
        title: "About Us - Food Flow".to_string(),
        sections: vec![
            section(
                "About Food Flow",
                &[
                    "A student software engineering project built as a real-world ordering system.",
                    "Makes Halal food easier to find and order.",
                ],
            ),
            section(
                "What you can do",
                &[
                    "Browse the menu by cuisine and get recommendations.",
                    "Order with a discount code and follow your delivery.",
                    "Rate the dishes you tried.",
                    "Vendors can register and manage their own listings.",
                ],
            ),
        ],
    }
}
