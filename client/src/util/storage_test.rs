use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("theme"), None);

    storage.set("theme", "dark");
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));

    storage.set("theme", "light");
    assert_eq!(storage.get("theme").as_deref(), Some("light"));

    storage.remove("theme");
    assert_eq!(storage.get("theme"), None);
}

#[test]
fn memory_storage_clear_drops_everything() {
    let storage = MemoryStorage::default();
    storage.set("a", "1");
    storage.set("b", "2");
    storage.clear();
    assert!(storage.entries().is_empty());
}

#[test]
fn memory_storage_entries_lists_pairs() {
    let storage = MemoryStorage::default();
    storage.set("b", "2");
    storage.set("a", "1");
    assert_eq!(
        storage.entries(),
        vec![("a".to_owned(), "1".to_owned()), ("b".to_owned(), "2".to_owned())]
    );
}
