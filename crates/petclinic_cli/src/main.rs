//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `petclinic_core` wiring.
//! - Seed a fresh in-memory store and print the resulting counts.

use chrono::Local;
use petclinic_core::{
    KvOwnerRepository, KvVetRepository, MemoryKvStore, OwnerRepository, RepoResult, SeedLoader,
    VetRepository,
};
use std::sync::Arc;

fn main() {
    if let Err(err) = run() {
        eprintln!("petclinic_cli failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> RepoResult<()> {
    let store = Arc::new(MemoryKvStore::new());
    SeedLoader::new(Arc::clone(&store)).load(Local::now().date_naive())?;

    let owners = KvOwnerRepository::new(Arc::clone(&store));
    let vets = KvVetRepository::new(store);

    println!("petclinic_core version={}", petclinic_core::core_version());
    println!(
        "seeded owners={} vets={} pet_types={}",
        owners.count()?,
        vets.count()?,
        owners.find_pet_types()?.len()
    );
    Ok(())
}
