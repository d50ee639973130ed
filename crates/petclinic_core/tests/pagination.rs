use petclinic_core::{
    KvOwnerRepository, MemoryKvStore, Owner, OwnerId, OwnerRepository, PageRequest,
};
use std::collections::HashSet;
use std::sync::Arc;

fn repo() -> KvOwnerRepository<MemoryKvStore> {
    KvOwnerRepository::new(Arc::new(MemoryKvStore::new()))
}

fn seed_owners(repo: &KvOwnerRepository<MemoryKvStore>, last_names: &[&str]) -> Vec<OwnerId> {
    last_names
        .iter()
        .enumerate()
        .map(|(index, last_name)| {
            let owner = Owner::new(
                format!("First{index}"),
                *last_name,
                "1 Main St.",
                "Madison",
                "6085550000",
            );
            repo.save(owner).unwrap().id.unwrap()
        })
        .collect()
}

#[test]
fn page_union_reconstructs_the_collection_for_every_page_size() {
    let repo = repo();
    let seeded: HashSet<OwnerId> = seed_owners(
        &repo,
        &["Franklin", "Davis", "Rodriquez", "Davis", "McTavish", "Coleman", "Ortega"],
    )
    .into_iter()
    .collect();
    let total = seeded.len() as u64;

    for size in 1..=seeded.len() as u32 {
        let mut collected = Vec::new();
        let mut number = 1;
        loop {
            let page = repo.find_all_paged(&PageRequest::new(number, size)).unwrap();
            assert_eq!(page.total, total);
            if page.is_empty() {
                break;
            }
            collected.extend(page.items.into_iter().map(|owner| owner.id.unwrap()));
            number += 1;
        }

        assert_eq!(collected.len(), seeded.len(), "page size {size} dropped or duplicated rows");
        let unique: HashSet<OwnerId> = collected.into_iter().collect();
        assert_eq!(unique, seeded, "page size {size} changed the row set");
    }
}

#[test]
fn page_past_the_end_is_empty_with_true_total() {
    let repo = repo();
    seed_owners(
        &repo,
        &["Franklin", "Davis", "Rodriquez", "Davis", "McTavish", "Coleman"],
    );

    let page = repo.find_all_paged(&PageRequest::new(100, 5)).unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 6);
}

#[test]
fn prefix_search_filters_sorts_and_counts_matches_only() {
    let repo = repo();
    seed_owners(&repo, &["Davis", "Franklin", "Douglas", "Davis"]);

    let page = repo
        .find_by_last_name_prefix("D", &PageRequest::new(1, 10))
        .unwrap();

    assert_eq!(page.total, 3);
    let last_names: Vec<&str> = page.items.iter().map(|o| o.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Davis", "Davis", "Douglas"]);
}

#[test]
fn prefix_search_is_case_insensitive() {
    let repo = repo();
    seed_owners(&repo, &["Davis", "Franklin", "Douglas", "Davis"]);

    let lower = repo
        .find_by_last_name_prefix("dav", &PageRequest::new(1, 10))
        .unwrap();
    assert_eq!(lower.total, 2);

    let upper = repo
        .find_by_last_name_prefix("DAV", &PageRequest::new(1, 10))
        .unwrap();
    assert_eq!(upper.total, 2);
}

#[test]
fn empty_prefix_matches_every_owner() {
    let repo = repo();
    seed_owners(&repo, &["Davis", "Franklin", "Douglas", "Davis"]);

    let page = repo
        .find_by_last_name_prefix("", &PageRequest::new(1, 10))
        .unwrap();

    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 4);
    let last_names: Vec<&str> = page.items.iter().map(|o| o.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Davis", "Davis", "Douglas", "Franklin"]);
}

#[test]
fn prefix_search_pages_are_sliced_after_sorting() {
    let repo = repo();
    seed_owners(&repo, &["Douglas", "Davis", "Franklin", "Davis"]);

    let first = repo
        .find_by_last_name_prefix("D", &PageRequest::new(1, 2))
        .unwrap();
    let second = repo
        .find_by_last_name_prefix("D", &PageRequest::new(2, 2))
        .unwrap();

    assert_eq!(first.total, 3);
    let first_names: Vec<&str> = first.items.iter().map(|o| o.last_name.as_str()).collect();
    assert_eq!(first_names, vec!["Davis", "Davis"]);
    let second_names: Vec<&str> = second.items.iter().map(|o| o.last_name.as_str()).collect();
    assert_eq!(second_names, vec!["Douglas"]);
}

#[test]
fn prefix_search_with_no_match_is_empty_with_zero_total() {
    let repo = repo();
    seed_owners(&repo, &["Davis", "Franklin"]);

    let page = repo
        .find_by_last_name_prefix("Zz", &PageRequest::new(1, 10))
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}
