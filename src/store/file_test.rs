use super::*;
use crate::store::{ACCESS_TOKEN_KEY, DEMO_MODE_KEY};

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("session.json")).unwrap();
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
    store.set(DEMO_MODE_KEY, "true").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(ACCESS_TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(reopened.get(DEMO_MODE_KEY).as_deref(), Some("true"));
}

#[test]
fn remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
    store.remove(&[ACCESS_TOKEN_KEY]).unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(ACCESS_TOKEN_KEY), None);
}

#[test]
fn remove_of_absent_keys_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.remove(&[ACCESS_TOKEN_KEY]).unwrap();
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = FileStore::open(&path).err().unwrap();
    assert!(matches!(err, StoreError::Corrupt(_)));
}
