//! Per-session state: cart, order tracker, reviews and the logged-in vendor.
//!
//! The whole context is one serde value stored under [`SESSION_KEY`] in the
//! session store. Handlers load it through
//! [`ShopSession`](crate::middleware::session::ShopSession), hand it to the
//! services by reference and write it back after a successful mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{CatalogItem, OrderReceipt, Review, VendorAccount};

pub const SESSION_KEY: &str = "foodflow.session";
pub const SESSION_COOKIE: &str = "foodflow.sid";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub cart: Vec<CatalogItem>,
    pub tracker: OrderTracker,
    pub reviews: Vec<Review>,
    pub vendor: Option<VendorAccount>,
    pub last_order: Option<OrderReceipt>,
}

impl SessionState {
    pub fn cart_contains(&self, name: &str) -> bool {
        self.cart.iter().any(|item| item.name == name)
    }

    pub fn cart_subtotal(&self) -> i64 {
        self.cart.iter().map(|item| item.price).sum()
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Received,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Order Received",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("No active order found! Please place an order first.")]
    NoActiveOrder,
    #[error("Your order has already been delivered.")]
    AlreadyDelivered,
}

/// Linear delivery tracker. Status 0 doubles as "no active order".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTracker {
    status: OrderStatus,
    track_available: bool,
}

impl OrderTracker {
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Received
    }

    pub fn track_available(&self) -> bool {
        self.track_available
    }

    /// A confirmed order always restarts tracking at step 1.
    pub fn start(&mut self) {
        self.status = OrderStatus::Preparing;
        self.track_available = true;
    }

    pub fn advance(&mut self) -> Result<OrderStatus, TrackerError> {
        if !self.is_active() {
            return Err(TrackerError::NoActiveOrder);
        }
        let next = self.status.next().ok_or(TrackerError::AlreadyDelivered)?;
        self.status = next;
        Ok(next)
    }

    pub fn reset(&mut self) {
        self.status = OrderStatus::Received;
        self.track_available = false;
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.status.index()) / 3.0
    }
}
