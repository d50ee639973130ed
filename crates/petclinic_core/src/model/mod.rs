//! Domain aggregates and value objects for the clinic core.
//!
//! # Responsibility
//! - Define the persisted shapes for owner and vet aggregates.
//! - Keep exclusive-ownership boundaries explicit: an owner carries its
//!   pets and their visits, a vet carries its specialties.
//!
//! # Invariants
//! - Entity ids are assigned by the repository on first save and never
//!   mutated afterwards by this layer.
//! - `PetType` and `Specialty` are value objects compared by name; they
//!   never carry an id in this store.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod owner;
pub mod vet;
