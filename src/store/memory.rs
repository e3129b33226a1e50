//! In-memory store, used by tests and the `memory` backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::{Store, StoreOp};
use crate::errors::AppError;

/// A `HashMap` behind a lock. Can be switched off to emulate disabled storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Storage("Local storage is unavailable".to_string()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("Local storage lock poisoned".to_string())
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check_available()?;
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.check_available()?;
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.check_available()?;
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.remove(key);
        Ok(())
    }

    async fn apply(&self, ops: Vec<StoreOp>) -> Result<(), AppError> {
        self.check_available()?;
        // Single write guard, so readers never observe half a batch.
        let mut slots = self.slots.write().map_err(poisoned)?;
        for op in ops {
            match op {
                StoreOp::Set { key, value } => {
                    slots.insert(key, value);
                }
                StoreOp::Delete { key } => {
                    slots.remove(&key);
                }
            }
        }
        Ok(())
    }
}
