use web_sys::{Storage, window};

use crate::ports::{KeyValueStore, MemoryStore};

/// `localStorage`, or an in-memory map when the browser denies it (private
/// mode, sandboxed iframes).
pub(crate) enum LocalStore {
    Browser(Storage),
    Memory(MemoryStore),
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => LocalStore::Browser(storage),
            _ => {
                log::warn!("localStorage unavailable; high score will not persist");
                LocalStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            LocalStore::Browser(s) => s.get_item(key).ok().flatten(),
            LocalStore::Memory(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            LocalStore::Browser(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("failed to store {key}: {e:?}");
                }
            }
            LocalStore::Memory(m) => m.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) {
        match self {
            LocalStore::Browser(s) => {
                let _ = s.remove_item(key);
            }
            LocalStore::Memory(m) => m.remove(key),
        }
    }
}
