//! Owner repository contract and key-value implementation.
//!
//! # Responsibility
//! - Provide CRUD, prefix search and pagination over owner aggregates.
//! - Compose the id allocator, aggregate store and pet-type lookup set.
//!
//! # Invariants
//! - `save` allocates an id on first persist and overwrites the full
//!   aggregate; callers must pass the complete owner including every pet
//!   and visit they want retained.
//! - Paginated reads scan the whole kind and slice in-process. Under
//!   concurrent writers that snapshot is eventually consistent; a page
//!   boundary computed from one read may be stale by the next.
//!
//! # See also
//! - docs/architecture/storage-layout.md

use crate::kv::aggregate::AggregateStore;
use crate::kv::lookup::LookupSet;
use crate::kv::sequence::IdAllocator;
use crate::kv::KvStore;
use crate::model::owner::{Owner, OwnerId, PetType};
use crate::repo::page::{slice_page, Page, PageRequest};
use crate::repo::{RepoError, RepoResult};
use std::sync::Arc;

const OWNER_KEY: &str = "owners";
const OWNER_ID_SEQUENCE_KEY: &str = "owner_id_sequence";
const PET_TYPE_KEY: &str = "pet_types";

/// Repository contract for owner aggregates.
///
/// Implementations differ only in their backing store; the key-value
/// implementation lives in this module.
pub trait OwnerRepository {
    /// Persists the owner, allocating an id iff it has none, and returns
    /// the possibly id-assigned owner.
    fn save(&self, owner: Owner) -> RepoResult<Owner>;

    /// Gets one owner by id.
    fn find_by_id(&self, id: OwnerId) -> RepoResult<Option<Owner>>;

    /// Returns an unordered snapshot of every owner.
    fn find_all(&self) -> RepoResult<Vec<Owner>>;

    /// Returns one page of the unordered owner snapshot.
    ///
    /// The slice order is the store's snapshot order; repeated calls are
    /// only stable while the collection does not mutate between them.
    fn find_all_paged(&self, request: &PageRequest) -> RepoResult<Page<Owner>>;

    /// Returns one page of owners whose last name starts with `prefix`,
    /// case-insensitively. An empty prefix matches everyone. Matches are
    /// sorted ascending by last name before slicing, and the page total
    /// counts matching rows only.
    fn find_by_last_name_prefix(&self, prefix: &str, request: &PageRequest)
        -> RepoResult<Page<Owner>>;

    /// Returns all known pet types, sorted by name ascending.
    fn find_pet_types(&self) -> RepoResult<Vec<PetType>>;

    /// Removes one owner by id. Removing an absent id is a no-op.
    fn delete_by_id(&self, id: OwnerId) -> RepoResult<()>;

    /// Removes the given owner. Fails with `MissingId` when the owner was
    /// never persisted.
    fn delete(&self, owner: &Owner) -> RepoResult<()>;

    /// Removes every owner.
    fn delete_all(&self) -> RepoResult<()>;

    /// Returns whether an owner with this id exists.
    fn exists_by_id(&self, id: OwnerId) -> RepoResult<bool>;

    /// Returns the number of stored owners.
    fn count(&self) -> RepoResult<u64>;

    /// Persists each owner in order and returns them with assigned ids.
    fn save_all(&self, owners: Vec<Owner>) -> RepoResult<Vec<Owner>> {
        let mut saved = Vec::with_capacity(owners.len());
        for owner in owners {
            saved.push(self.save(owner)?);
        }
        Ok(saved)
    }

    /// Gets every owner matching one of `ids`; missing ids are skipped.
    fn find_all_by_id(&self, ids: &[OwnerId]) -> RepoResult<Vec<Owner>> {
        let mut found = Vec::new();
        for id in ids {
            if let Some(owner) = self.find_by_id(*id)? {
                found.push(owner);
            }
        }
        Ok(found)
    }

    /// Removes every owner matching one of `ids`.
    fn delete_all_by_id(&self, ids: &[OwnerId]) -> RepoResult<()> {
        for id in ids {
            self.delete_by_id(*id)?;
        }
        Ok(())
    }
}

/// Key-value-backed owner repository.
pub struct KvOwnerRepository<S> {
    aggregates: AggregateStore<S>,
    pet_types: LookupSet<S>,
    ids: IdAllocator<S>,
}

impl<S: KvStore> KvOwnerRepository<S> {
    /// Creates a repository over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            aggregates: AggregateStore::new(Arc::clone(&store)),
            pet_types: LookupSet::new(Arc::clone(&store)),
            ids: IdAllocator::new(store),
        }
    }
}

impl<S: KvStore> OwnerRepository for KvOwnerRepository<S> {
    fn save(&self, mut owner: Owner) -> RepoResult<Owner> {
        let id = match owner.id {
            Some(id) => id,
            None => {
                // Id allocation and the aggregate write are two separate
                // store operations; a crash in between leaves an unused id.
                let id = self.ids.next(OWNER_ID_SEQUENCE_KEY)?;
                owner.id = Some(id);
                id
            }
        };

        self.aggregates.put(OWNER_KEY, id, &owner)?;
        Ok(owner)
    }

    fn find_by_id(&self, id: OwnerId) -> RepoResult<Option<Owner>> {
        Ok(self.aggregates.get(OWNER_KEY, id)?)
    }

    fn find_all(&self) -> RepoResult<Vec<Owner>> {
        Ok(self.aggregates.all(OWNER_KEY)?)
    }

    fn find_all_paged(&self, request: &PageRequest) -> RepoResult<Page<Owner>> {
        let owners = self.find_all()?;
        Ok(slice_page(owners, request))
    }

    fn find_by_last_name_prefix(
        &self,
        prefix: &str,
        request: &PageRequest,
    ) -> RepoResult<Page<Owner>> {
        let needle = prefix.to_lowercase();
        let mut matches: Vec<Owner> = self
            .find_all()?
            .into_iter()
            .filter(|owner| owner.last_name.to_lowercase().starts_with(&needle))
            .collect();
        matches.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(slice_page(matches, request))
    }

    fn find_pet_types(&self) -> RepoResult<Vec<PetType>> {
        let mut types: Vec<PetType> = self.pet_types.members(PET_TYPE_KEY)?;
        types.sort();
        Ok(types)
    }

    fn delete_by_id(&self, id: OwnerId) -> RepoResult<()> {
        Ok(self.aggregates.delete(OWNER_KEY, id)?)
    }

    fn delete(&self, owner: &Owner) -> RepoResult<()> {
        let id = owner.id.ok_or(RepoError::MissingId("owner"))?;
        self.delete_by_id(id)
    }

    fn delete_all(&self) -> RepoResult<()> {
        Ok(self.aggregates.clear(OWNER_KEY)?)
    }

    fn exists_by_id(&self, id: OwnerId) -> RepoResult<bool> {
        Ok(self.aggregates.exists(OWNER_KEY, id)?)
    }

    fn count(&self) -> RepoResult<u64> {
        Ok(self.aggregates.count(OWNER_KEY)?)
    }
}
