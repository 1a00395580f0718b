use serde_json::json;
use tokio::sync::broadcast;

use crate::models::AlertNotification;

/// Everything pushed to open pages over `/events`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The pending alert list changed; pages should re-fetch `/alerts/list`.
    AlertsUpdated,
    /// A fresh market snapshot was stored.
    MandiUpdated,
    PriceAlert(AlertNotification),
}

pub type EventSender = broadcast::Sender<AppEvent>;

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::AlertsUpdated => "alertsUpdated",
            AppEvent::MandiUpdated => "mandiUpdated",
            AppEvent::PriceAlert(_) => "priceAlert",
        }
    }

    pub fn data(&self) -> String {
        match self {
            AppEvent::PriceAlert(n) => json!(n).to_string(),
            _ => "1".to_string(),
        }
    }
}

pub fn channel() -> (EventSender, broadcast::Receiver<AppEvent>) {
    broadcast::channel(64)
}
