//! Key-Value Storage
//!
//! The get/set seam over browser localStorage. Implementations can be the
//! real browser store or an in-memory map for tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to encode value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{KeyValueStore, StorageError, StorageResult};

    /// In-memory stand-in for localStorage
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
        fail_writes: Cell<bool>,
    }

    impl MemoryStorage {
        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        /// Make every following `set` fail like a full quota
        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.set(fail);
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            if self.fail_writes.get() {
                return Err(StorageError::Backend("QuotaExceededError".to_string()));
            }
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
