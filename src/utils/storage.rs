//! Browser local storage access behind a swappable backend

use std::cell::RefCell;
use std::collections::HashMap;

/// Raw string key-value storage.
///
/// `read` never panics; a missing key, an inaccessible storage area and a
/// read error all come back as `None`. Callers own deserialization and its
/// failures.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed storage.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for unit tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_read_write() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.read("k"), None);
        storage.write("k", "v");
        assert_eq!(storage.read("k"), Some("v".to_string()));
        storage.write("k", "v2");
        assert_eq!(storage.read("k"), Some("v2".to_string()));
    }

    #[test]
    fn test_memory_storage_remove() {
        let storage = MemoryStorage::default();
        storage.write("k", "v");
        storage.remove("k");
        assert_eq!(storage.read("k"), None);
        // removing an absent key is a no-op
        storage.remove("k");
    }
}
