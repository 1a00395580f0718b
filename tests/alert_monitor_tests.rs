use std::{sync::Arc, time::Duration};

use agrisaarthi::{
    error::{AppError, AppResult},
    events::{self, AppEvent},
    models::{MarketRecord, PriceAlert},
    services::{
        alert_monitor::{evaluate_alerts, PriceAlertMonitor},
        alert_store::AlertStore,
        market_snapshot::MarketSnapshot,
    },
    store::{BlobStore, MemoryStore, SharedBlobStore, PRICE_ALERTS_KEY},
};
use tokio::sync::broadcast::{error::TryRecvError, Receiver};

fn record(commodity: &str, market: &str, modal: f64) -> MarketRecord {
    MarketRecord {
        state: "Maharashtra".into(),
        district: "Pune".into(),
        market: market.into(),
        commodity: commodity.into(),
        variety: "Other".into(),
        min_price: Some(modal - 100.0),
        max_price: Some(modal + 100.0),
        modal_price: Some(modal),
        arrival_date: "01/06/2025".into(),
    }
}

struct Harness {
    blob: SharedBlobStore,
    alerts: AlertStore,
    snapshot: MarketSnapshot,
    monitor: PriceAlertMonitor,
    rx: Receiver<AppEvent>,
}

fn harness_with(blob: SharedBlobStore) -> Harness {
    let alerts = AlertStore::load(blob.clone()).unwrap();
    let snapshot = MarketSnapshot::load(blob.clone()).unwrap();
    let (events_tx, rx) = events::channel();
    let monitor = PriceAlertMonitor::new(alerts.clone(), snapshot.clone(), events_tx);

    Harness {
        blob,
        alerts,
        snapshot,
        monitor,
        rx,
    }
}

fn harness() -> Harness {
    harness_with(Arc::new(MemoryStore::new()))
}

fn persisted_alerts(blob: &SharedBlobStore) -> Vec<PriceAlert> {
    let raw = blob.get(PRICE_ALERTS_KEY).unwrap().unwrap_or_else(|| "[]".into());
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn onion_alert_fires_and_is_removed() {
    let mut h = harness();
    h.alerts.add_alert("Onion", 2000.0).unwrap();
    h.snapshot.replace(vec![record("onion", "Pune", 2200.0)]).unwrap();

    let fired = h.monitor.tick().unwrap();

    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].message, "Onion at Pune reached ₹2200");
    assert_eq!(fired[0].market, "Pune");
    assert_eq!(fired[0].price, 2200.0);

    assert!(h.alerts.list().unwrap().is_empty());
    assert!(persisted_alerts(&h.blob).is_empty());

    match h.rx.try_recv().unwrap() {
        AppEvent::PriceAlert(n) => assert_eq!(n, fired[0]),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(h.rx.try_recv().unwrap(), AppEvent::AlertsUpdated);
    assert!(matches!(h.rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn empty_snapshot_fires_nothing() {
    let mut h = harness();
    h.alerts.add_alert("Wheat", 3000.0).unwrap();

    let fired = h.monitor.tick().unwrap();

    assert!(fired.is_empty());
    assert_eq!(h.alerts.list().unwrap(), vec![PriceAlert::new("Wheat", 3000.0)]);
    assert!(matches!(h.rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn only_satisfied_rice_alert_fires() {
    let h = harness();
    h.alerts.add_alert("Rice", 1800.0).unwrap();
    h.alerts.add_alert("Rice", 2500.0).unwrap();
    h.snapshot.replace(vec![record("Rice", "Karnal", 2000.0)]).unwrap();

    let fired = h.monitor.tick().unwrap();

    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].target_price, 1800.0);
    assert_eq!(h.alerts.list().unwrap(), vec![PriceAlert::new("Rice", 2500.0)]);
}

#[test]
fn unmatched_ticks_have_no_side_effects() {
    let mut h = harness();
    h.alerts.add_alert("Tomato", 5000.0).unwrap();
    h.snapshot
        .replace(vec![record("Tomato", "Nashik", 1200.0), record("Onion", "Pune", 9000.0)])
        .unwrap();

    let before = h.blob.get(PRICE_ALERTS_KEY).unwrap();

    assert!(h.monitor.tick().unwrap().is_empty());
    assert!(h.monitor.tick().unwrap().is_empty());

    assert_eq!(h.blob.get(PRICE_ALERTS_KEY).unwrap(), before);
    assert_eq!(h.alerts.list().unwrap().len(), 1);
    assert!(matches!(h.rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn one_alert_per_commodity_per_tick() {
    let h = harness();
    h.alerts.add_alert("Onion", 1000.0).unwrap();
    h.alerts.add_alert("onion", 1500.0).unwrap();
    h.alerts.add_alert("Potato", 900.0).unwrap();
    h.snapshot
        .replace(vec![record("Onion", "Pune", 2000.0), record("Potato", "Agra", 950.0)])
        .unwrap();

    let first = h.monitor.tick().unwrap();
    let fired: Vec<_> = first.iter().map(|n| n.target_price).collect();
    assert_eq!(fired, vec![1000.0, 900.0]);
    assert_eq!(h.alerts.list().unwrap(), vec![PriceAlert::new("onion", 1500.0)]);

    let second = h.monitor.tick().unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].message, "onion at Pune reached ₹2000");
    assert!(h.alerts.list().unwrap().is_empty());

    assert!(h.monitor.tick().unwrap().is_empty());
}

#[test]
fn first_matching_record_is_reported() {
    let mut alerts = vec![PriceAlert::new("Onion", 2000.0)];
    let records = vec![
        record("Onion", "Satara", 1500.0),
        record("Onion", "Lasalgaon", 2100.0),
        record("Onion", "Nashik", 2600.0),
    ];

    let fired = evaluate_alerts(&mut alerts, &records);

    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].market, "Lasalgaon");
    assert!(alerts.is_empty());
}

#[test]
fn records_without_price_never_match() {
    let mut alerts = vec![PriceAlert::new("Garlic", 1.0)];
    let mut r = record("Garlic", "Mandsaur", 0.0);
    r.modal_price = None;

    assert!(evaluate_alerts(&mut alerts, &[r]).is_empty());
    assert_eq!(alerts.len(), 1);
}

#[test]
fn matching_is_exact_not_fuzzy() {
    let mut alerts = vec![PriceAlert::new("Onion", 100.0)];
    let records = vec![record("Onion Seed", "Pune", 5000.0), record("Onio", "Pune", 5000.0)];

    assert!(evaluate_alerts(&mut alerts, &records).is_empty());
}

#[test]
fn add_alert_rejects_bad_targets() {
    let h = harness();

    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = h.alerts.add_alert("Onion", bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    assert!(h.alerts.list().unwrap().is_empty());
    assert!(h.blob.get(PRICE_ALERTS_KEY).unwrap().is_none());
}

#[test]
fn duplicate_commodities_are_independent() {
    let h = harness();
    h.alerts.add_alert("Onion", 2000.0).unwrap();
    h.alerts.add_alert("Onion", 2000.0).unwrap();

    assert_eq!(h.alerts.list().unwrap().len(), 2);
    assert_eq!(persisted_alerts(&h.blob).len(), 2);
}

struct ReadOnlyStore {
    inner: MemoryStore,
}

impl BlobStore for ReadOnlyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::other(format!("{key} is read-only"))))
    }
}

#[test]
fn failed_write_keeps_alert_pending() {
    let inner = MemoryStore::new();
    inner
        .put(PRICE_ALERTS_KEY, r#"[{"commodity":"Onion","target":2000}]"#)
        .unwrap();
    inner
        .put(
            "mandiData",
            r#"[{"commodity":"Onion","market":"Pune","modal_price":"2500"}]"#,
        )
        .unwrap();

    let mut h = harness_with(Arc::new(ReadOnlyStore { inner }));
    assert_eq!(h.snapshot.current().unwrap().len(), 1);

    assert!(h.monitor.tick().is_err());
    assert_eq!(h.alerts.list().unwrap(), vec![PriceAlert::new("Onion", 2000.0)]);
    assert!(matches!(h.rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn spawned_monitor_polls_until_stopped() {
    let mut h = harness();
    h.snapshot.replace(vec![record("Onion", "Pune", 2200.0)]).unwrap();
    h.alerts.add_alert("Onion", 2000.0).unwrap();

    let handle = h.monitor.clone().spawn(Duration::from_secs(10));
    assert!(handle.is_running());

    let started = tokio::time::Instant::now();
    let evt = h.rx.recv().await.unwrap();
    assert!(matches!(evt, AppEvent::PriceAlert(_)));
    assert!(started.elapsed() >= Duration::from_secs(10));
    assert_eq!(h.rx.recv().await.unwrap(), AppEvent::AlertsUpdated);

    handle.stop();
    tokio::task::yield_now().await;

    h.alerts.add_alert("Onion", 2100.0).unwrap();
    let waited = tokio::time::timeout(Duration::from_secs(60), h.rx.recv()).await;
    assert!(waited.is_err(), "monitor kept polling after stop");
    assert_eq!(h.alerts.list().unwrap().len(), 1);
}
