//! Library entrypoint for AgriSaarthi.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod store;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

use services::{
    alert_monitor::PriceAlertMonitor, alert_store::AlertStore, mandi::MandiClient,
    market_snapshot::MarketSnapshot,
};

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub alerts: AlertStore,
    pub snapshot: MarketSnapshot,
    pub mandi: MandiClient,
    pub events_tx: events::EventSender,
}

impl AppState {
    /// Wires both persisted stores over one blob backend.
    pub fn new(
        settings: config::Settings,
        hbs: templates::Hbs,
        blob: store::SharedBlobStore,
    ) -> error::AppResult<Self> {
        let alerts = AlertStore::load(blob.clone())?;
        let snapshot = MarketSnapshot::load(blob)?;
        let mandi = MandiClient::new(
            settings.data_gov_api_key.clone(),
            settings.mandi_api_url.clone(),
        );
        let (events_tx, _events_rx) = events::channel();

        Ok(Self {
            hbs,
            settings,
            alerts,
            snapshot,
            mandi,
            events_tx,
        })
    }

    /// A monitor sharing this state's stores and event bus.
    pub fn monitor(&self) -> PriceAlertMonitor {
        PriceAlertMonitor::new(
            self.alerts.clone(),
            self.snapshot.clone(),
            self.events_tx.clone(),
        )
    }
}
