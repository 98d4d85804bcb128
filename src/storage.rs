//! Key-Value Storage Layer
//!
//! Abstract string storage with a browser `localStorage` backend
//! and an in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String-valued key-value store
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Shared handle to the store used by the whole app
pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage`
#[derive(Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Process-local store, lost on reload
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open `localStorage`, falling back to memory when the browser refuses
/// (private mode, disabled storage, non-browser target).
pub fn open_default() -> SharedStore {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("[STORAGE] {}, falling back to memory", err);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// Store whose every access fails
#[cfg(test)]
pub(crate) struct BrokenStorage;

#[cfg(test)]
impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Access("quota exceeded".to_string()))
    }
}
