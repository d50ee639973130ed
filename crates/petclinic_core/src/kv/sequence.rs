//! Identifier allocation over the backing counter namespace.
//!
//! # Responsibility
//! - Issue strictly increasing integer ids, one independent counter per
//!   entity kind.
//!
//! # Invariants
//! - No two calls for the same sequence key ever return the same value.
//! - Gaps are acceptable (an allocated id may go unused after a failed
//!   write); duplicates are not.
//! - A failed or malformed counter response propagates as an error. It is
//!   never defaulted to 1.

use super::{KvResult, KvStore};
use std::sync::Arc;

/// Allocator for per-kind integer id sequences.
pub struct IdAllocator<S> {
    store: Arc<S>,
}

impl<S: KvStore> IdAllocator<S> {
    /// Creates an allocator over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Atomically increments the sequence at `sequence_key` and returns the
    /// new id. The first allocation for an uninitialized sequence is 1.
    pub fn next(&self, sequence_key: &str) -> KvResult<i64> {
        self.store.increment(sequence_key)
    }
}
