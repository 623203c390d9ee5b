//! Key-Value Storage
//!
//! Abstract string storage. `LocalStorage` is the browser backend;
//! tests use the in-process `MemoryStorage`.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use super::error::{StoreError, StoreResult};

/// String key-value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// In-process storage with an optional per-value size limit
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values longer than `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: RefCell::default(),
            quota: Some(bytes),
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StoreError::Write(format!(
                    "quota exceeded: {} bytes > {}",
                    value.len(),
                    quota
                )));
            }
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        storage.set_item("k", "w").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_memory_quota() {
        let storage = MemoryStorage::with_quota(4);
        assert!(storage.set_item("k", "1234").is_ok());
        assert!(matches!(storage.set_item("k", "12345"), Err(StoreError::Write(_))));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("1234"));
    }
}
