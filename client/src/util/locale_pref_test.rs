#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn read_preference_defaults_without_stored_value() {
    let storage = MemoryStorage::new();
    assert_eq!(read_preference(&storage), Locale::default());
}

#[test]
fn read_preference_uses_stored_value() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, "en");
    assert_eq!(read_preference(&storage), Locale::En);
}

#[test]
fn read_preference_ignores_unknown_stored_value() {
    let storage = MemoryStorage::with_item(STORAGE_KEY, "klingon");
    assert_eq!(read_preference(&storage), Locale::default());
}

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    assert_eq!(toggle(&storage, Locale::Zh), Locale::En);
    assert_eq!(storage.get_item(STORAGE_KEY).as_deref(), Some("en"));
    assert_eq!(toggle(&storage, Locale::En), Locale::Zh);
    assert_eq!(read_preference(&storage), Locale::Zh);
}
