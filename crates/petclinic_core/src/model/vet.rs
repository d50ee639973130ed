//! Vet aggregate: vet and specialty associations.
//!
//! # Responsibility
//! - Define the vet aggregate persisted as one unit.
//!
//! # Invariants
//! - `id` is `None` until the first repository save and immutable after.
//! - Specialties are deduplicated by value; the same specialty value may
//!   be shared by any number of vets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable integer identifier assigned by the vet id sequence.
pub type VetId = i64;

/// Specialty value object, deduplicated by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Specialty {
    /// Specialty name, e.g. `radiology`.
    pub name: String,
}

impl Specialty {
    /// Creates a specialty value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Vet aggregate root persisted as one unit with its specialties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    /// Assigned by the repository on first save.
    pub id: Option<VetId>,
    pub first_name: String,
    pub last_name: String,
    /// Deduplicated specialty associations. The set is unordered by
    /// contract; the name-ordered representation keeps the serialized
    /// aggregate deterministic.
    pub specialties: BTreeSet<Specialty>,
}

impl Vet {
    /// Creates a transient vet with no id and no specialties.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            specialties: BTreeSet::new(),
        }
    }

    /// Returns whether this vet has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Adds a specialty association; adding a duplicate is a no-op.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.insert(specialty);
    }

    /// Returns the number of distinct specialties.
    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}
