//! Key-value persistence: the browser's `localStorage` and an in-memory
//! stand-in with the same interface.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("reading '{key}' failed: {message}")]
    Read { key: String, message: String },

    #[error("writing '{key}' failed: {message}")]
    Write { key: String, message: String },

    #[error("serializing '{key}' failed: {message}")]
    Serialize { key: String, message: String },
}

/// String blobs keyed by a stable name
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Read and decode a JSON value. Missing keys are `Ok(None)`.
    fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get_item(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Encode a value as JSON and store it
    fn set_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.set_item(key, &raw)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

fn get_local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Fails when the quota is exceeded
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_memory_storage_shares_state_between_clones() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap(), Some("v".to_string()));
        other.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_json_helpers() {
        let storage = MemoryStorage::new();
        storage.set_json("p", &Point { x: 1, y: 2 }).unwrap();
        assert_eq!(storage.get_item("p").unwrap().unwrap(), r#"{"x":1,"y":2}"#);
        assert_eq!(storage.get_json::<Point>("p").unwrap(), Some(Point { x: 1, y: 2 }));
        assert_eq!(storage.get_json::<Point>("missing").unwrap(), None);
    }

    #[test]
    fn test_corrupt_json_is_a_read_error() {
        let storage = MemoryStorage::new();
        storage.set_item("p", "{oops").unwrap();
        assert!(matches!(
            storage.get_json::<Point>("p"),
            Err(StorageError::Read { .. })
        ));
    }
}
