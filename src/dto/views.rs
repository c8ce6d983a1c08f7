use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::{
        cart::CartSummary, reviews::RatingChart, tracker::TrackerView, vendors::VendorDashboard,
    },
    models::{CatalogItem, Review},
    pricing::DiscountCode,
};

/// The six named views selectable through the `page` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum View {
    #[default]
    Homepage,
    Order,
    Progress,
    Review,
    Vendor,
    AboutUs,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Homepage,
        View::Order,
        View::Progress,
        View::Review,
        View::Vendor,
        View::AboutUs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Homepage => "Homepage",
            View::Order => "Order",
            View::Progress => "Progress",
            View::Review => "Review",
            View::Vendor => "Vendor",
            View::AboutUs => "AboutUs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Homepage => "Home",
            View::Order => "Order",
            View::Progress => "Progress",
            View::Review => "Review",
            View::Vendor => "Vendor",
            View::AboutUs => "About Us",
        }
    }

    pub fn href(self) -> String {
        format!("/?page={}", self.name())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavLink {
    pub view: View,
    pub title: String,
    pub href: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageView {
    pub view: View,
    pub nav: Vec<NavLink>,
    #[schema(value_type = Object)]
    pub content: ViewContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ViewContent {
    Homepage(HomepageView),
    Order(OrderView),
    Progress(TrackerView),
    Review(ReviewView),
    Vendor(VendorView),
    AboutUs(AboutUsView),
}

#[derive(Debug, Serialize)]
pub struct HomepageView {
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub items: Vec<CatalogItem>,
    pub recommendations: Vec<CatalogItem>,
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    pub cart: CartSummary,
    pub discount_options: Vec<DiscountCode>,
    pub track_available: bool,
}

#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub categories: Vec<String>,
    pub chart: RatingChart,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct VendorView {
    pub dashboard: Option<VendorDashboard>,
}

#[derive(Debug, Serialize)]
pub struct AboutSection {
    pub heading: String,
    pub points: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AboutUsView {
    pub title: String,
    pub sections: Vec<AboutSection>,
}
