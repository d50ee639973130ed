use petclinic_core::{
    KvVetRepository, MemoryKvStore, PageRequest, RepoError, Specialty, Vet, VetRepository,
};
use std::sync::Arc;

fn repo() -> KvVetRepository<MemoryKvStore> {
    KvVetRepository::new(Arc::new(MemoryKvStore::new()))
}

#[test]
fn save_assigns_id_on_first_persist() {
    let repo = repo();

    let carter = repo.save(Vet::new("James", "Carter")).unwrap();
    let leary = repo.save(Vet::new("Helen", "Leary")).unwrap();

    assert_eq!(carter.id, Some(1));
    assert_eq!(leary.id, Some(2));
}

#[test]
fn save_and_find_by_id_roundtrips_specialties() {
    let repo = repo();

    let mut douglas = Vet::new("Linda", "Douglas");
    douglas.add_specialty(Specialty::new("surgery"));
    douglas.add_specialty(Specialty::new("dentistry"));
    douglas.add_specialty(Specialty::new("surgery"));

    let saved = repo.save(douglas).unwrap();
    assert_eq!(saved.nr_of_specialties(), 2);

    let loaded = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert!(loaded.specialties.contains(&Specialty::new("dentistry")));
}

#[test]
fn find_by_id_missing_returns_none() {
    let repo = repo();

    assert!(repo.find_by_id(9).unwrap().is_none());
}

#[test]
fn find_all_with_specialties_equals_plain_find_all() {
    let repo = repo();

    let mut leary = Vet::new("Helen", "Leary");
    leary.add_specialty(Specialty::new("radiology"));
    repo.save(leary).unwrap();
    repo.save(Vet::new("James", "Carter")).unwrap();

    let plain = repo.find_all().unwrap();
    let eager = repo.find_all_with_specialties().unwrap();
    assert_eq!(plain, eager);
}

#[test]
fn find_all_paged_slices_the_snapshot() {
    let repo = repo();

    repo.save(Vet::new("James", "Carter")).unwrap();
    repo.save(Vet::new("Helen", "Leary")).unwrap();
    repo.save(Vet::new("Linda", "Douglas")).unwrap();

    let first = repo.find_all_paged(&PageRequest::new(1, 2)).unwrap();
    let second = repo.find_all_paged(&PageRequest::new(2, 2)).unwrap();

    assert_eq!(first.items.len(), 2);
    assert_eq!(second.items.len(), 1);
    assert_eq!(first.total, 3);
    assert_eq!(second.total, 3);
}

#[test]
fn delete_by_id_is_idempotent_and_delete_requires_id() {
    let repo = repo();

    let saved = repo.save(Vet::new("Sharon", "Jenkins")).unwrap();
    repo.delete_by_id(77).unwrap();
    assert_eq!(repo.count().unwrap(), 1);

    repo.delete(&saved).unwrap();
    assert_eq!(repo.count().unwrap(), 0);

    let err = repo.delete(&Vet::new("Henry", "Stevens")).unwrap_err();
    assert!(matches!(err, RepoError::MissingId("vet")));
}

#[test]
fn delete_all_and_exists_by_id() {
    let repo = repo();

    let saved = repo.save(Vet::new("Rafael", "Ortega")).unwrap();
    assert!(repo.exists_by_id(saved.id.unwrap()).unwrap());

    repo.delete_all().unwrap();
    assert!(!repo.exists_by_id(saved.id.unwrap()).unwrap());
    assert_eq!(repo.count().unwrap(), 0);
}
