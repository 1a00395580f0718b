use std::sync::{Arc, RwLock};

use crate::{
    error::{AppError, AppResult},
    models::MarketRecord,
    store::{self, SharedBlobStore, MANDI_DATA_KEY},
};

/// Latest fetched mandi records, cached in memory and in the `mandiData` blob.
/// Replaced wholesale, never merged.
#[derive(Clone)]
pub struct MarketSnapshot {
    blob: SharedBlobStore,
    current: Arc<RwLock<Arc<Vec<MarketRecord>>>>,
}

fn poisoned() -> AppError {
    AppError::Io(std::io::Error::other("market snapshot lock poisoned"))
}

impl MarketSnapshot {
    pub fn load(blob: SharedBlobStore) -> AppResult<Self> {
        let records: Vec<MarketRecord> = store::load_list(blob.as_ref(), MANDI_DATA_KEY)?;

        Ok(Self {
            blob,
            current: Arc::new(RwLock::new(Arc::new(records))),
        })
    }

    /// Empty when nothing was ever fetched.
    pub fn current(&self) -> AppResult<Arc<Vec<MarketRecord>>> {
        let cur = self.current.read().map_err(|_| poisoned())?;
        Ok(Arc::clone(&cur))
    }

    pub fn replace(&self, records: Vec<MarketRecord>) -> AppResult<()> {
        let mut cur = self.current.write().map_err(|_| poisoned())?;
        store::save_list(self.blob.as_ref(), MANDI_DATA_KEY, &records)?;
        tracing::debug!("market snapshot replaced: {} records", records.len());
        *cur = Arc::new(records);
        Ok(())
    }
}
