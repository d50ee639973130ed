//! Typed aggregate storage over the backing hash namespace.
//!
//! # Responsibility
//! - Map "kind key -> id -> serialized aggregate" onto `KvStore` hash ops.
//! - Own the JSON encode/decode boundary for persisted aggregates.
//!
//! # Invariants
//! - Aggregates are written and read as whole units; there is no partial
//!   field update at this layer.
//! - A payload that fails to decode surfaces `KvError::Corrupt`, never a
//!   defaulted value.

use super::{KvError, KvResult, KvStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Generic "kind -> id -> aggregate" map over a shared store handle.
pub struct AggregateStore<S> {
    store: Arc<S>,
}

impl<S: KvStore> AggregateStore<S> {
    /// Creates an aggregate view over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Upserts the aggregate stored under `kind`/`id`, overwriting any
    /// prior value.
    pub fn put<T: Serialize>(&self, kind: &str, id: i64, aggregate: &T) -> KvResult<()> {
        let payload = serde_json::to_string(aggregate).map_err(|err| KvError::Corrupt {
            key: kind.to_string(),
            detail: err.to_string(),
        })?;
        self.store.hash_put(kind, &id.to_string(), &payload)
    }

    /// Reads the aggregate stored under `kind`/`id`.
    pub fn get<T: DeserializeOwned>(&self, kind: &str, id: i64) -> KvResult<Option<T>> {
        match self.store.hash_get(kind, &id.to_string())? {
            Some(payload) => decode(kind, &payload).map(Some),
            None => Ok(None),
        }
    }

    /// Removes the aggregate stored under `kind`/`id`. Removing an absent
    /// id is a no-op.
    pub fn delete(&self, kind: &str, id: i64) -> KvResult<()> {
        self.store.hash_delete(kind, &id.to_string())
    }

    /// Returns every aggregate currently stored under `kind`.
    ///
    /// Order is the backend's snapshot order; callers impose their own
    /// ordering where the contract requires one.
    pub fn all<T: DeserializeOwned>(&self, kind: &str) -> KvResult<Vec<T>> {
        let payloads = self.store.hash_values(kind)?;
        let mut aggregates = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            aggregates.push(decode(kind, payload)?);
        }
        Ok(aggregates)
    }

    /// Returns the number of aggregates stored under `kind`.
    pub fn count(&self, kind: &str) -> KvResult<u64> {
        self.store.hash_len(kind)
    }

    /// Returns whether an aggregate exists under `kind`/`id`.
    pub fn exists(&self, kind: &str, id: i64) -> KvResult<bool> {
        self.store.hash_contains(kind, &id.to_string())
    }

    /// Removes every aggregate stored under `kind`.
    pub fn clear(&self, kind: &str) -> KvResult<()> {
        self.store.delete_key(kind)
    }
}

fn decode<T: DeserializeOwned>(kind: &str, payload: &str) -> KvResult<T> {
    serde_json::from_str(payload).map_err(|err| KvError::Corrupt {
        key: kind.to_string(),
        detail: err.to_string(),
    })
}
