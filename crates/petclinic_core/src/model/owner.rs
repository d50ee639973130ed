//! Owner aggregate: owner, pets and their visits.
//!
//! # Responsibility
//! - Define the owner aggregate persisted as one unit.
//! - Provide the lookup helpers callers use when editing pets.
//!
//! # Invariants
//! - `id` is `None` until the first repository save and immutable after.
//! - `pets` keeps insertion order; display order equals insertion order.
//! - Pet-name uniqueness among siblings is enforced by the caller, not
//!   by this layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable integer identifier assigned by the owner id sequence.
pub type OwnerId = i64;

/// Pet category value object, deduplicated by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetType {
    /// Category name, e.g. `cat`.
    pub name: String,
}

impl PetType {
    /// Creates a pet type value.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One clinic visit, owned exclusively by its pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Day of the visit.
    pub date: NaiveDate,
    /// Free-text reason for the visit.
    pub description: String,
}

impl Visit {
    /// Creates a visit record.
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }
}

/// A pet owned by exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Pet id in the global pet namespace. Not allocated by this layer;
    /// stays `None` unless a caller assigns one.
    pub id: Option<i64>,
    /// Display name, unique among the siblings of the same owner.
    pub name: String,
    /// Day of birth.
    pub birth_date: NaiveDate,
    /// Category reference, serialized inline with the aggregate.
    #[serde(rename = "type")]
    pub kind: PetType,
    /// Visit history in insertion order.
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Creates a pet with no id and an empty visit history.
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, kind: PetType) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            kind,
            visits: Vec::new(),
        }
    }

    /// Appends a visit to this pet's history.
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }
}

/// Owner aggregate root persisted as one unit with its pets and visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Assigned by the repository on first save.
    pub id: Option<OwnerId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Owned pets in insertion order.
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Creates a transient owner with no id and no pets.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            telephone: telephone.into(),
            pets: Vec::new(),
        }
    }

    /// Returns whether this owner has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Appends a pet to this owner.
    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// Finds an owned pet by name, case-insensitively.
    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pets
            .iter()
            .find(|pet| pet.name.eq_ignore_ascii_case(name))
    }

    /// Finds an owned pet by name for mutation, case-insensitively.
    pub fn pet_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets
            .iter_mut()
            .find(|pet| pet.name.eq_ignore_ascii_case(name))
    }
}
