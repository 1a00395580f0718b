//! In-memory [`BlobStore`] used by tests.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AppError, AppResult};

use super::BlobStore;

#[derive(Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::Io(std::io::Error::other("memory store lock poisoned"))
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let blobs = self.blobs.read().map_err(|_| poisoned())?;
        Ok(blobs.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let mut blobs = self.blobs.write().map_err(|_| poisoned())?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
