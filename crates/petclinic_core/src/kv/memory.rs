//! In-process key-value store backend.
//!
//! # Responsibility
//! - Provide the default `KvStore` backend with per-key atomicity.
//! - Keep hash snapshots deterministic while the hash is not mutated.
//!
//! # Invariants
//! - Each namespace is guarded by its own lock; a single operation never
//!   holds more than one lock.
//! - Counter increments happen under a write lock, so no two callers ever
//!   observe the same value for the same key.
//!
//! # See also
//! - docs/architecture/storage-layout.md

use super::{KvResult, KvStore};
use log::info;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Thread-safe in-memory `KvStore` backend.
///
/// Hashes are kept as field-ordered maps so that repeated full-hash reads
/// over an unmutated hash return the same snapshot order. The repository
/// contract still treats that order as undefined.
#[derive(Default)]
pub struct MemoryKvStore {
    hashes: RwLock<HashMap<String, BTreeMap<String, String>>>,
    sets: RwLock<HashMap<String, BTreeSet<String>>>,
    counters: RwLock<HashMap<String, i64>>,
}

impl MemoryKvStore {
    /// Creates an empty store.
    ///
    /// # Side effects
    /// - Emits a `kv_open` logging event.
    pub fn new() -> Self {
        info!("event=kv_open module=kv status=ok mode=memory");
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn hash_put(&self, key: &str, field: &str, value: &str) -> KvResult<()> {
        let mut hashes = self.hashes.write();
        hashes
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    fn hash_get(&self, key: &str, field: &str) -> KvResult<Option<String>> {
        let hashes = self.hashes.read();
        Ok(hashes.get(key).and_then(|hash| hash.get(field).cloned()))
    }

    fn hash_delete(&self, key: &str, field: &str) -> KvResult<()> {
        let mut hashes = self.hashes.write();
        if let Some(hash) = hashes.get_mut(key) {
            hash.remove(field);
        }
        Ok(())
    }

    fn hash_values(&self, key: &str) -> KvResult<Vec<String>> {
        let hashes = self.hashes.read();
        Ok(hashes
            .get(key)
            .map(|hash| hash.values().cloned().collect())
            .unwrap_or_default())
    }

    fn hash_len(&self, key: &str) -> KvResult<u64> {
        let hashes = self.hashes.read();
        Ok(hashes.get(key).map_or(0, |hash| hash.len() as u64))
    }

    fn hash_contains(&self, key: &str, field: &str) -> KvResult<bool> {
        let hashes = self.hashes.read();
        Ok(hashes.get(key).is_some_and(|hash| hash.contains_key(field)))
    }

    fn set_add(&self, key: &str, values: &[String]) -> KvResult<()> {
        let mut sets = self.sets.write();
        let set = sets.entry(key.to_string()).or_default();
        for value in values {
            set.insert(value.clone());
        }
        Ok(())
    }

    fn set_members(&self, key: &str) -> KvResult<Vec<String>> {
        let sets = self.sets.read();
        Ok(sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn increment(&self, key: &str) -> KvResult<i64> {
        let mut counters = self.counters.write();
        let counter = counters.entry(key.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    fn delete_key(&self, key: &str) -> KvResult<()> {
        self.hashes.write().remove(key);
        self.sets.write().remove(key);
        self.counters.write().remove(key);
        Ok(())
    }
}
