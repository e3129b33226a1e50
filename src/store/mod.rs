//! Local Record Store: a string-keyed store of JSON text values.
//!
//! Mirrors the browser's local storage. No expiry, no versioning; the last
//! write to a key wins.

mod keys;
mod memory;
mod sqlite;

pub use keys::*;
pub use memory::*;
pub use sqlite::*;

use async_trait::async_trait;

use crate::errors::AppError;

/// A single mutation inside an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Set { key: String, value: String },
    Delete { key: String },
}

impl StoreOp {
    pub fn set(key: &StoreKey, value: impl Into<String>) -> Self {
        StoreOp::Set {
            key: key.to_string(),
            value: value.into(),
        }
    }

    pub fn delete(key: &StoreKey) -> Self {
        StoreOp::Delete {
            key: key.to_string(),
        }
    }
}

/// Key-value persistence used by the record codecs.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the value under `key`, or `None` when the slot is empty.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrite the slot under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove the slot under `key`. Removing an empty slot succeeds.
    async fn delete(&self, key: &str) -> Result<(), AppError>;

    /// Apply every op or none of them.
    async fn apply(&self, ops: Vec<StoreOp>) -> Result<(), AppError>;
}
