use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryTokenStore::default();
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_replaces_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn local_store_keeps_configured_key() {
    let store = LocalTokenStore::new("auth_token");
    assert_eq!(store.key(), "auth_token");
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_reads_nothing_natively() {
    let store = LocalTokenStore::new("auth_token");
    store.save("ignored");
    assert_eq!(store.load(), None);
    store.clear();
}
