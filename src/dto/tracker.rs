use serde::Serialize;
use utoipa::ToSchema;

use crate::session::{OrderStatus, OrderTracker};

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackerView {
    pub status: OrderStatus,
    pub index: u8,
    pub label: String,
    pub progress: f64,
    pub active: bool,
    pub track_available: bool,
    pub steps: Vec<String>,
}

impl From<&OrderTracker> for TrackerView {
    fn from(tracker: &OrderTracker) -> Self {
        let status = tracker.status();
        Self {
            status,
            index: status.index(),
            label: status.label().to_string(),
            progress: tracker.progress(),
            active: tracker.is_active(),
            track_available: tracker.track_available(),
            steps: OrderStatus::ALL
                .iter()
                .map(|step| step.label().to_string())
                .collect(),
        }
    }
}
