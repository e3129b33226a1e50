//! Record codecs over the Local Record Store.
//!
//! Reads never fail: a missing, unreadable or corrupt slot is reported as
//! absent. Writes surface storage errors to the caller.

mod drafts;
mod employees;
mod submissions;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::store::{Store, StoreKey};

/// Typed access to drafts, submissions and per-employee records.
#[derive(Clone)]
pub struct Records {
    store: Arc<dyn Store>,
}

impl Records {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Read a raw slot, treating storage failures as absence.
    async fn read_raw(&self, key: &StoreKey) -> Option<String> {
        match self.store.get(&key.to_string()).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Reading {} failed, treating as absent: {}", key, e);
                None
            }
        }
    }

    /// Read and decode a JSON slot, treating corrupt content as absence.
    async fn read_json<T: DeserializeOwned>(&self, key: &StoreKey) -> Option<T> {
        let raw = self.read_raw(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Stored {} is not valid, treating as absent: {}", key, e);
                None
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, crate::errors::AppError> {
    serde_json::to_string(value)
        .map_err(|e| crate::errors::AppError::Internal(format!("Failed to encode record: {}", e)))
}
