use whistleblower_portal::{db, store::MemoryStore};

pub fn client() -> db::Client<MemoryStore> {
    db::Client::new(MemoryStore::new())
}

/// Client plus a handle on its backing store, for tests that inject or
/// inspect raw collection payloads.
pub fn client_with_store() -> (db::Client<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (db::Client::new(store.clone()), store)
}
