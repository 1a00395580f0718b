use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::PriceAlert,
    store::{self, SharedBlobStore, PRICE_ALERTS_KEY},
};

/// The pending alert list, mirrored in memory and written through to the
/// `priceAlerts` blob on every change.
///
/// Cloning is cheap and every clone shares the same list, so the same store
/// is handed to the alerts controller (writer) and the monitor (reader and
/// remover). All mutation goes through [`AlertStore::update`].
#[derive(Clone)]
pub struct AlertStore {
    blob: SharedBlobStore,
    alerts: Arc<Mutex<Vec<PriceAlert>>>,
}

impl AlertStore {
    /// Hydrates the in-memory list from the blob store.
    pub fn load(blob: SharedBlobStore) -> AppResult<Self> {
        let alerts: Vec<PriceAlert> = store::load_list(blob.as_ref(), PRICE_ALERTS_KEY)?;
        tracing::info!("loaded {} pending price alerts", alerts.len());

        Ok(Self {
            blob,
            alerts: Arc::new(Mutex::new(alerts)),
        })
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<PriceAlert>>> {
        self.alerts
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("alert store lock poisoned")))
    }

    pub fn list(&self) -> AppResult<Vec<PriceAlert>> {
        Ok(self.lock()?.clone())
    }

    /// Runs `f` on a copy of the list under the store lock. If the copy
    /// changed it is persisted first and only then becomes the live list, so
    /// a failed write leaves both sides as they were.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<PriceAlert>) -> R) -> AppResult<R> {
        let mut guard = self.lock()?;

        let mut next = guard.clone();
        let out = f(&mut next);

        if next != *guard {
            store::save_list(self.blob.as_ref(), PRICE_ALERTS_KEY, &next)?;
            *guard = next;
        }

        Ok(out)
    }

    /// Appends an independent alert; duplicates per commodity are allowed.
    pub fn add_alert(&self, commodity: &str, target_price: f64) -> AppResult<PriceAlert> {
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(AppError::InvalidInput(
                "Please enter a valid target price.".to_string(),
            ));
        }

        let alert = PriceAlert::new(commodity, target_price);
        let created = alert.clone();
        self.update(move |alerts| alerts.push(alert))?;

        tracing::info!(
            "price alert set: {} >= {}",
            created.commodity,
            created.target_price
        );
        Ok(created)
    }
}
