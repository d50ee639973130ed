//! Repository layer abstractions and key-value implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for owners and vets.
//! - Isolate store-layout details (keys, payload encoding) from callers.
//!
//! # Invariants
//! - Repositories are stateless between calls; all shared state lives in
//!   the backing store.
//! - A missing entity resolves to an absent result, never an error. The
//!   only argument error is an operation that requires an assigned id.
//! - Store failures propagate unchanged; this layer never retries.
//!
//! # See also
//! - docs/architecture/storage-layout.md

use crate::kv::KvError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod owner_repo;
pub mod page;
pub mod vet_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// The operation requires an entity with an assigned id.
    MissingId(&'static str),
    /// Backing-store failure, propagated unchanged.
    Kv(KvError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId(entity) => {
                write!(f, "{entity} id is required but has not been assigned")
            }
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingId(_) => None,
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<KvError> for RepoError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}
