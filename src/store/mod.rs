//! Key-value blob storage for persisted app state.
//!
//! Values are opaque JSON strings. The two keys the app writes are
//! [`PRICE_ALERTS_KEY`] and [`MANDI_DATA_KEY`]; typed access lives in
//! `services::alert_store` and `services::market_snapshot`.
//!
//! Implementations must be `Send + Sync` so one instance can sit behind an
//! `Arc` in [`AppState`](crate::AppState) and inside the monitor task.

pub mod file;
pub mod memory;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppResult;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

pub const PRICE_ALERTS_KEY: &str = "priceAlerts";
pub const MANDI_DATA_KEY: &str = "mandiData";

pub trait BlobStore: Send + Sync {
    /// `None` when the key was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn put(&self, key: &str, value: &str) -> AppResult<()>;
}

pub type SharedBlobStore = Arc<dyn BlobStore>;

/// Reads and decodes a JSON list; a missing key is an empty list.
pub fn load_list<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> AppResult<Vec<T>> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

pub fn save_list<T: Serialize>(store: &dyn BlobStore, key: &str, items: &[T]) -> AppResult<()> {
    let raw = serde_json::to_string(items)?;
    store.put(key, &raw)
}
