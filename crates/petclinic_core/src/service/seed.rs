//! Sample-data seeding for a fresh store.
//!
//! # Responsibility
//! - Reset the five store keys and load the fixed clinic fixture through
//!   the repository write contract.
//!
//! # Invariants
//! - Seeding is destructive: existing owners, vets, pet types and both id
//!   sequences are cleared first, so seeded ids always start at 1.
//! - Pet birth dates and the single visit date are relative to the
//!   injected `today`, keeping the fixture reproducible in tests.

use crate::kv::lookup::LookupSet;
use crate::kv::KvStore;
use crate::model::owner::{Owner, Pet, PetType, Visit};
use crate::model::vet::{Specialty, Vet};
use crate::repo::owner_repo::{KvOwnerRepository, OwnerRepository};
use crate::repo::vet_repo::{KvVetRepository, VetRepository};
use crate::repo::RepoResult;
use chrono::{Days, Months, NaiveDate};
use log::info;
use std::sync::Arc;

/// Every key the loader resets before writing the fixture.
const SEEDED_KEYS: &[&str] = &[
    "owners",
    "vets",
    "pet_types",
    "owner_id_sequence",
    "vet_id_sequence",
];

const PET_TYPE_KEY: &str = "pet_types";

/// Loads the fixed sample fixture into a backing store.
pub struct SeedLoader<S> {
    store: Arc<S>,
    owners: KvOwnerRepository<S>,
    vets: KvVetRepository<S>,
    pet_types: LookupSet<S>,
}

impl<S: KvStore> SeedLoader<S> {
    /// Creates a loader over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            owners: KvOwnerRepository::new(Arc::clone(&store)),
            vets: KvVetRepository::new(Arc::clone(&store)),
            pet_types: LookupSet::new(Arc::clone(&store)),
            store,
        }
    }

    /// Clears the seeded keys and writes the sample fixture: six pet
    /// types, six vets and six owners with their pets, one of which has a
    /// recorded visit.
    ///
    /// # Side effects
    /// - Emits `seed` logging events on start and completion.
    pub fn load(&self, today: NaiveDate) -> RepoResult<()> {
        info!("event=seed module=service status=start");

        for key in SEEDED_KEYS {
            self.store.delete_key(key)?;
        }

        self.load_pet_types()?;
        self.load_vets()?;
        self.load_owners(today)?;

        info!("event=seed module=service status=ok vets=6 owners=6 pet_types=6");
        Ok(())
    }

    fn load_pet_types(&self) -> RepoResult<()> {
        let types = [
            PetType::new("dog"),
            PetType::new("cat"),
            PetType::new("bird"),
            PetType::new("lizard"),
            PetType::new("snake"),
            PetType::new("hamster"),
        ];
        self.pet_types.add_all(PET_TYPE_KEY, &types)?;
        Ok(())
    }

    fn load_vets(&self) -> RepoResult<()> {
        let radiology = Specialty::new("radiology");
        let surgery = Specialty::new("surgery");
        let dentistry = Specialty::new("dentistry");

        self.vets.save(Vet::new("James", "Carter"))?;

        let mut leary = Vet::new("Helen", "Leary");
        leary.add_specialty(radiology.clone());
        self.vets.save(leary)?;

        let mut douglas = Vet::new("Linda", "Douglas");
        douglas.add_specialty(surgery.clone());
        douglas.add_specialty(dentistry);
        self.vets.save(douglas)?;

        let mut ortega = Vet::new("Rafael", "Ortega");
        ortega.add_specialty(surgery);
        self.vets.save(ortega)?;

        let mut stevens = Vet::new("Henry", "Stevens");
        stevens.add_specialty(radiology);
        self.vets.save(stevens)?;

        self.vets.save(Vet::new("Sharon", "Jenkins"))?;

        Ok(())
    }

    fn load_owners(&self, today: NaiveDate) -> RepoResult<()> {
        let dog = PetType::new("dog");
        let cat = PetType::new("cat");
        let snake = PetType::new("snake");
        let hamster = PetType::new("hamster");

        let mut franklin = Owner::new(
            "George",
            "Franklin",
            "110 W. Liberty St.",
            "Madison",
            "6085551023",
        );
        franklin.add_pet(Pet::new("Leo", years_before(today, 2), cat.clone()));
        self.owners.save(franklin)?;

        let mut davis = Owner::new(
            "Betty",
            "Davis",
            "638 Cardinal Ave.",
            "Sun Prairie",
            "6085551749",
        );
        davis.add_pet(Pet::new("Basil", years_before(today, 1), hamster));
        self.owners.save(davis)?;

        let mut rodriquez = Owner::new(
            "Eduardo",
            "Rodriquez",
            "2693 Commerce St.",
            "McFarland",
            "6085558763",
        );
        rodriquez.add_pet(Pet::new("Rosy", years_before(today, 3), dog.clone()));
        self.owners.save(rodriquez)?;

        let mut davis_h = Owner::new(
            "Harold",
            "Davis",
            "563 Friendly St.",
            "Windsor",
            "6085553198",
        );
        davis_h.add_pet(Pet::new("Jewel", years_before(today, 1), dog));
        self.owners.save(davis_h)?;

        let mut mctavish = Owner::new(
            "Peter",
            "McTavish",
            "2387 S. Fair Way",
            "Madison",
            "6085552765",
        );
        mctavish.add_pet(Pet::new("George", years_before(today, 4), snake));
        self.owners.save(mctavish)?;

        let mut coleman = Owner::new(
            "Jean",
            "Coleman",
            "105 N. Lake St.",
            "Monona",
            "6085552654",
        );
        coleman.add_pet(Pet::new("Max", years_before(today, 2), cat.clone()));
        coleman.add_pet(Pet::new("Samantha", years_before(today, 1), cat));
        let mut coleman = self.owners.save(coleman)?;

        // The visit is recorded after the first save; the second save
        // overwrites the whole aggregate with the visit included.
        if let Some(samantha) = coleman.pet_mut("Samantha") {
            samantha.add_visit(Visit::new(today - Days::new(5), "Sneezing"));
        }
        self.owners.save(coleman)?;

        Ok(())
    }
}

fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today - Months::new(12 * years)
}
