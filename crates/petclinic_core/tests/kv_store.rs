use petclinic_core::{KvStore, MemoryKvStore};

#[test]
fn counter_starts_at_one_and_increments() {
    let store = MemoryKvStore::new();

    assert_eq!(store.increment("owner_id_sequence").unwrap(), 1);
    assert_eq!(store.increment("owner_id_sequence").unwrap(), 2);
    assert_eq!(store.increment("owner_id_sequence").unwrap(), 3);
}

#[test]
fn counters_are_independent_per_key() {
    let store = MemoryKvStore::new();

    assert_eq!(store.increment("owner_id_sequence").unwrap(), 1);
    assert_eq!(store.increment("vet_id_sequence").unwrap(), 1);
    assert_eq!(store.increment("owner_id_sequence").unwrap(), 2);
}

#[test]
fn hash_put_get_roundtrip_and_overwrite() {
    let store = MemoryKvStore::new();

    store.hash_put("owners", "1", "first").unwrap();
    assert_eq!(store.hash_get("owners", "1").unwrap().as_deref(), Some("first"));

    store.hash_put("owners", "1", "second").unwrap();
    assert_eq!(store.hash_get("owners", "1").unwrap().as_deref(), Some("second"));
    assert_eq!(store.hash_len("owners").unwrap(), 1);
}

#[test]
fn hash_delete_is_idempotent() {
    let store = MemoryKvStore::new();

    store.hash_put("owners", "1", "value").unwrap();
    store.hash_delete("owners", "1").unwrap();
    store.hash_delete("owners", "1").unwrap();
    store.hash_delete("owners", "missing").unwrap();

    assert_eq!(store.hash_len("owners").unwrap(), 0);
    assert!(!store.hash_contains("owners", "1").unwrap());
}

#[test]
fn hash_values_snapshot_is_stable_while_unmutated() {
    let store = MemoryKvStore::new();

    store.hash_put("owners", "1", "a").unwrap();
    store.hash_put("owners", "2", "b").unwrap();
    store.hash_put("owners", "3", "c").unwrap();

    let first = store.hash_values("owners").unwrap();
    let second = store.hash_values("owners").unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn set_add_deduplicates_by_value() {
    let store = MemoryKvStore::new();

    store
        .set_add("pet_types", &["cat".to_string(), "dog".to_string()])
        .unwrap();
    store
        .set_add("pet_types", &["cat".to_string(), "bird".to_string()])
        .unwrap();

    let mut members = store.set_members("pet_types").unwrap();
    members.sort();
    assert_eq!(members, vec!["bird", "cat", "dog"]);
}

#[test]
fn delete_key_clears_every_namespace_and_is_idempotent() {
    let store = MemoryKvStore::new();

    store.hash_put("sample", "1", "value").unwrap();
    store.set_add("sample", &["member".to_string()]).unwrap();
    store.increment("sample").unwrap();

    store.delete_key("sample").unwrap();
    store.delete_key("sample").unwrap();

    assert_eq!(store.hash_len("sample").unwrap(), 0);
    assert!(store.set_members("sample").unwrap().is_empty());
    // A cleared counter restarts from one.
    assert_eq!(store.increment("sample").unwrap(), 1);
}
