//! Typed lookup-set storage over the backing set namespace.
//!
//! # Responsibility
//! - Store id-less reference values (pet types) as a deduplicated set.
//!
//! # Invariants
//! - Values are deduplicated by equality of their serialized form, which
//!   for single-field value objects coincides with value equality.

use super::{KvError, KvResult, KvStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Deduplicating set of serialized values under a fixed key.
pub struct LookupSet<S> {
    store: Arc<S>,
}

impl<S: KvStore> LookupSet<S> {
    /// Creates a lookup view over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Unions `values` into the set stored at `key`.
    pub fn add_all<T: Serialize>(&self, key: &str, values: &[T]) -> KvResult<()> {
        let mut payloads = Vec::with_capacity(values.len());
        for value in values {
            payloads.push(
                serde_json::to_string(value).map_err(|err| KvError::Corrupt {
                    key: key.to_string(),
                    detail: err.to_string(),
                })?,
            );
        }
        self.store.set_add(key, &payloads)
    }

    /// Returns every member of the set stored at `key`.
    pub fn members<T: DeserializeOwned>(&self, key: &str) -> KvResult<Vec<T>> {
        let payloads = self.store.set_members(key)?;
        let mut values = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            values.push(
                serde_json::from_str(payload).map_err(|err| KvError::Corrupt {
                    key: key.to_string(),
                    detail: err.to_string(),
                })?,
            );
        }
        Ok(values)
    }

    /// Removes the set stored at `key`. Idempotent.
    pub fn clear(&self, key: &str) -> KvResult<()> {
        self.store.delete_key(key)
    }
}
