//! Key-value storage primitives backing the repository layer.
//!
//! # Responsibility
//! - Define the backing-store contract (`KvStore`) used by repositories.
//! - Provide typed wrappers for aggregates, lookup sets and id sequences.
//!
//! # Invariants
//! - Every operation is atomic per key; there is no cross-key transaction.
//! - Store failures propagate unchanged to callers. No retries, no silent
//!   defaults.
//!
//! # See also
//! - docs/architecture/storage-layout.md

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod aggregate;
pub mod lookup;
mod memory;
pub mod sequence;

pub use memory::MemoryKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Transport and payload errors surfaced by the backing store.
#[derive(Debug)]
pub enum KvError {
    /// The backing store could not be reached or returned a protocol-level
    /// failure.
    Unavailable(String),
    /// A persisted payload under `key` could not be decoded.
    Corrupt { key: String, detail: String },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(detail) => write!(f, "key-value store unavailable: {detail}"),
            Self::Corrupt { key, detail } => {
                write!(f, "corrupt payload under key `{key}`: {detail}")
            }
        }
    }
}

impl Error for KvError {}

/// Contract for the backing key-value store.
///
/// Mirrors the three namespaces the repositories rely on: hashes for
/// aggregates keyed by id, sets for deduplicated lookup values, and integer
/// counters for id sequences. Implementations must be safe to share across
/// threads behind an `Arc`.
///
/// # Invariants
/// - `increment` is a single atomic operation; concurrent callers never
///   observe the same value for the same key.
/// - `hash_values` returns a snapshot whose order is backend-defined but
///   stable while the hash is not mutated.
/// - Deleting absent fields or keys is a no-op.
pub trait KvStore: Send + Sync {
    /// Upserts `field` in the hash stored at `key`.
    fn hash_put(&self, key: &str, field: &str, value: &str) -> KvResult<()>;
    /// Reads one field from the hash stored at `key`.
    fn hash_get(&self, key: &str, field: &str) -> KvResult<Option<String>>;
    /// Removes one field from the hash stored at `key`. Idempotent.
    fn hash_delete(&self, key: &str, field: &str) -> KvResult<()>;
    /// Returns every value in the hash stored at `key`.
    fn hash_values(&self, key: &str) -> KvResult<Vec<String>>;
    /// Returns the number of fields in the hash stored at `key`.
    fn hash_len(&self, key: &str) -> KvResult<u64>;
    /// Returns whether `field` exists in the hash stored at `key`.
    fn hash_contains(&self, key: &str, field: &str) -> KvResult<bool>;
    /// Unions `values` into the set stored at `key`, deduplicated by value
    /// equality.
    fn set_add(&self, key: &str, values: &[String]) -> KvResult<()>;
    /// Returns the members of the set stored at `key`.
    fn set_members(&self, key: &str) -> KvResult<Vec<String>>;
    /// Atomically increments the counter at `key` and returns the new
    /// value. An uninitialized counter yields 1.
    fn increment(&self, key: &str) -> KvResult<i64>;
    /// Removes `key` from every namespace. Idempotent.
    fn delete_key(&self, key: &str) -> KvResult<()>;
}
