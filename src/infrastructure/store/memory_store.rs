//! In-process mapping store.

use crate::domain::repositories::{MappingStore, PutOutcome, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Default)]
struct Inner {
    urls: HashMap<String, String>,
    clicks: HashMap<String, u64>,
}

/// Store keeping mappings and counters in process memory.
///
/// Offers the same atomicity as Redis: every operation runs under one mutex.
/// Data does not survive a restart. Used by tests and with
/// `STORE_BACKEND=memory` for local development.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Operation("mutex poisoned".to_string()))
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn exists(&self, code: &str) -> StoreResult<bool> {
        Ok(self.lock()?.urls.contains_key(code))
    }

    async fn put_if_absent(&self, code: &str, long_url: &str) -> StoreResult<PutOutcome> {
        match self.lock()?.urls.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(PutOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(long_url.to_string());
                Ok(PutOutcome::Created)
            }
        }
    }

    async fn get(&self, code: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.urls.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<u64> {
        let mut inner = self.lock()?;
        let counter = inner.clicks.entry(code.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    async fn clicks(&self, code: &str) -> StoreResult<u64> {
        Ok(self.lock()?.clicks.get(code).copied().unwrap_or(0))
    }

    async fn health_check(&self) -> bool {
        self.inner.lock().is_ok()
    }
}
