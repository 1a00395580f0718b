use std::{collections::HashSet, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    error::AppResult,
    events::{AppEvent, EventSender},
    models::{AlertNotification, MarketRecord, PriceAlert},
    services::{alert_store::AlertStore, market_snapshot::MarketSnapshot},
};

/// Periodically matches pending alerts against the market snapshot.
#[derive(Clone)]
pub struct PriceAlertMonitor {
    alerts: AlertStore,
    snapshot: MarketSnapshot,
    events_tx: EventSender,
}

impl PriceAlertMonitor {
    pub fn new(alerts: AlertStore, snapshot: MarketSnapshot, events_tx: EventSender) -> Self {
        Self {
            alerts,
            snapshot,
            events_tx,
        }
    }

    /// One evaluation pass. Fired alerts are removed and persisted before any
    /// notification goes out; a failed write fires nothing.
    pub fn tick(&self) -> AppResult<Vec<AlertNotification>> {
        let records = self.snapshot.current()?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let fired = self
            .alerts
            .update(|alerts| evaluate_alerts(alerts, &records))?;

        for n in &fired {
            tracing::info!("[alert-monitor] {}", n.message);
            let _ = self.events_tx.send(AppEvent::PriceAlert(n.clone()));
        }

        if !fired.is_empty() {
            let _ = self.events_tx.send(AppEvent::AlertsUpdated);
        }

        Ok(fired)
    }

    /// Starts the polling loop. The first tick runs one `period` after start.
    /// The loop lives exactly as long as the returned handle.
    pub fn spawn(self, period: Duration) -> MonitorHandle {
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                if let Err(e) = self.tick() {
                    tracing::warn!("[alert-monitor] tick error: {}", e);
                }
            }
        });

        tracing::info!("[alert-monitor] polling every {:?}", period);
        MonitorHandle { task }
    }
}

/// Owns the polling task; dropping it cancels the loop.
pub struct MonitorHandle {
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Removes satisfied alerts from `alerts` (store order) and returns one
/// notification per removed alert.
///
/// An alert is satisfied by the first record with the same commodity
/// (case-insensitive) whose modal price is at least the target. At most one
/// alert per commodity fires per pass; later alerts for that commodity stay
/// pending and are looked at again next pass.
pub fn evaluate_alerts(
    alerts: &mut Vec<PriceAlert>,
    records: &[MarketRecord],
) -> Vec<AlertNotification> {
    let mut fired_commodities: HashSet<String> = HashSet::new();
    let mut notifications = Vec::new();
    let mut pending = Vec::with_capacity(alerts.len());

    for alert in alerts.drain(..) {
        let key = alert.commodity.to_lowercase();
        if fired_commodities.contains(&key) {
            pending.push(alert);
            continue;
        }

        let hit = records.iter().find_map(|r| {
            let price = r.modal_price?;
            (r.is_commodity(&alert.commodity) && price >= alert.target_price)
                .then_some((r, price))
        });

        match hit {
            Some((record, price)) => {
                notifications.push(AlertNotification::new(&alert, &record.market, price));
                fired_commodities.insert(key);
            }
            None => pending.push(alert),
        }
    }

    *alerts = pending;
    notifications
}
