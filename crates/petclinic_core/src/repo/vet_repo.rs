//! Vet repository contract and key-value implementation.
//!
//! # Responsibility
//! - Provide CRUD and pagination over vet aggregates.
//!
//! # Invariants
//! - `save` allocates an id on first persist and overwrites the full
//!   aggregate including every specialty association.
//! - Specialties are stored inline with the aggregate, so eager and lazy
//!   loading collapse to the same read.
//!
//! # See also
//! - docs/architecture/storage-layout.md

use crate::kv::aggregate::AggregateStore;
use crate::kv::sequence::IdAllocator;
use crate::kv::KvStore;
use crate::model::vet::{Vet, VetId};
use crate::repo::page::{slice_page, Page, PageRequest};
use crate::repo::{RepoError, RepoResult};
use std::sync::Arc;

const VET_KEY: &str = "vets";
const VET_ID_SEQUENCE_KEY: &str = "vet_id_sequence";

/// Fixed cache name under which an external read-through cache collaborator
/// keys vet listings. The cache itself is outside this layer; the
/// repository stays the single source of truth.
pub const VET_CACHE_NAME: &str = "vets";

/// Repository contract for vet aggregates.
pub trait VetRepository {
    /// Persists the vet, allocating an id iff it has none, and returns the
    /// possibly id-assigned vet.
    fn save(&self, vet: Vet) -> RepoResult<Vet>;

    /// Gets one vet by id.
    fn find_by_id(&self, id: VetId) -> RepoResult<Option<Vet>>;

    /// Returns an unordered snapshot of every vet.
    fn find_all(&self) -> RepoResult<Vec<Vet>>;

    /// Returns one page of the unordered vet snapshot.
    fn find_all_paged(&self, request: &PageRequest) -> RepoResult<Page<Vet>>;

    /// Removes one vet by id. Removing an absent id is a no-op.
    fn delete_by_id(&self, id: VetId) -> RepoResult<()>;

    /// Removes the given vet. Fails with `MissingId` when the vet was
    /// never persisted.
    fn delete(&self, vet: &Vet) -> RepoResult<()>;

    /// Removes every vet.
    fn delete_all(&self) -> RepoResult<()>;

    /// Returns whether a vet with this id exists.
    fn exists_by_id(&self, id: VetId) -> RepoResult<bool>;

    /// Returns the number of stored vets.
    fn count(&self) -> RepoResult<u64>;

    /// Returns every vet with specialties populated. Specialties live
    /// inline in the serialized aggregate, so this is the plain snapshot
    /// read under a name kept for the relational variant's eager-load
    /// optimization path.
    fn find_all_with_specialties(&self) -> RepoResult<Vec<Vet>> {
        self.find_all()
    }
}

/// Key-value-backed vet repository.
pub struct KvVetRepository<S> {
    aggregates: AggregateStore<S>,
    ids: IdAllocator<S>,
}

impl<S: KvStore> KvVetRepository<S> {
    /// Creates a repository over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            aggregates: AggregateStore::new(Arc::clone(&store)),
            ids: IdAllocator::new(store),
        }
    }
}

impl<S: KvStore> VetRepository for KvVetRepository<S> {
    fn save(&self, mut vet: Vet) -> RepoResult<Vet> {
        let id = match vet.id {
            Some(id) => id,
            None => {
                let id = self.ids.next(VET_ID_SEQUENCE_KEY)?;
                vet.id = Some(id);
                id
            }
        };

        self.aggregates.put(VET_KEY, id, &vet)?;
        Ok(vet)
    }

    fn find_by_id(&self, id: VetId) -> RepoResult<Option<Vet>> {
        Ok(self.aggregates.get(VET_KEY, id)?)
    }

    fn find_all(&self) -> RepoResult<Vec<Vet>> {
        Ok(self.aggregates.all(VET_KEY)?)
    }

    fn find_all_paged(&self, request: &PageRequest) -> RepoResult<Page<Vet>> {
        let vets = self.find_all()?;
        Ok(slice_page(vets, request))
    }

    fn delete_by_id(&self, id: VetId) -> RepoResult<()> {
        Ok(self.aggregates.delete(VET_KEY, id)?)
    }

    fn delete(&self, vet: &Vet) -> RepoResult<()> {
        let id = vet.id.ok_or(RepoError::MissingId("vet"))?;
        self.delete_by_id(id)
    }

    fn delete_all(&self) -> RepoResult<()> {
        Ok(self.aggregates.clear(VET_KEY)?)
    }

    fn exists_by_id(&self, id: VetId) -> RepoResult<bool> {
        Ok(self.aggregates.exists(VET_KEY, id)?)
    }

    fn count(&self) -> RepoResult<u64> {
        Ok(self.aggregates.count(VET_KEY)?)
    }
}
