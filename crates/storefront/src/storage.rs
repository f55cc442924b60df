//! Key-value persistence layer.
//!
//! All durable state (cart, wishlist, orders, profile, settings) lives under
//! fixed string keys in a key-value store, the way a browser profile keeps
//! local storage. The [`StorageBackend`] trait is the seam: production code
//! uses the sled-backed [`SledBackend`], tests inject [`MemoryBackend`].
//!
//! Storage is last-write-wins with no conflict detection; two stores sharing
//! a backend will clobber each other, which is the accepted model for a
//! single-profile demo.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixed keys for persisted state.
pub mod keys {
    /// Key for the ordered sequence of cart lines.
    pub const CART: &str = "cart";

    /// Key for the ordered sequence of wishlisted product ids.
    pub const WISHLIST: &str = "wishlist";

    /// Key for the order history (newest first).
    pub const ORDERS: &str = "orders";

    /// Key for the user profile fields.
    pub const PROFILE: &str = "user_profile";

    /// Key for the notification/visibility settings.
    pub const SETTINGS: &str = "settings";
}

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed (I/O, database error).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored value could not be decoded.
    #[error("stored data under key '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// A string key-value store.
///
/// Values are JSON-serialized strings; the trait stays string-typed so a
/// backend never needs to know the shapes it holds.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value, defaulting when the key is absent.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if the stored string is not valid JSON
/// for `T`.
pub fn read_json<T: DeserializeOwned + Default>(
    backend: &dyn StorageBackend,
    key: &str,
) -> Result<T, StorageError> {
    match backend.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: key.to_owned(),
            reason: e.to_string(),
        }),
        None => Ok(T::default()),
    }
}

/// Encode and store a JSON value.
///
/// # Errors
///
/// Returns [`StorageError::Backend`] if the write fails.
pub fn write_json<T: Serialize>(
    backend: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Backend(e.to_string()))?;
    backend.set(key, &raw)
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Sled backend
// =============================================================================

/// Durable backend over an embedded sled database.
///
/// Values are flushed after every write so a killed process does not lose
/// the last mutation, matching how the demo persists after each operation.
#[derive(Debug, Clone)]
pub struct SledBackend {
    db: sled::Db,
}

impl SledBackend {
    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .path(path)
            .open()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Self { db })
    }

    /// Open a temporary database that is deleted on drop (tests).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the database cannot be opened.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Self { db })
    }
}

impl StorageBackend for SledBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(key).map_err(|e| StorageError::Backend(e.to_string()))? {
            Some(bytes) => {
                let value = String::from_utf8(bytes.to_vec()).map_err(|e| {
                    StorageError::Corrupt {
                        key: key.to_owned(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(key, value.as_bytes())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .remove(key)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn exercise_backend(backend: &dyn StorageBackend) {
        assert_eq!(backend.get("missing").unwrap(), None);

        backend.set(keys::CART, "[1,2,3]").unwrap();
        assert_eq!(backend.get(keys::CART).unwrap().as_deref(), Some("[1,2,3]"));

        backend.set(keys::CART, "[]").unwrap();
        assert_eq!(backend.get(keys::CART).unwrap().as_deref(), Some("[]"));

        backend.remove(keys::CART).unwrap();
        assert_eq!(backend.get(keys::CART).unwrap(), None);

        // Removing an absent key is a no-op
        backend.remove(keys::CART).unwrap();
    }

    #[test]
    fn test_memory_backend() {
        exercise_backend(&MemoryBackend::new());
    }

    #[test]
    fn test_sled_backend() {
        exercise_backend(&SledBackend::temporary().unwrap());
    }

    #[test]
    fn test_read_json_defaults_on_missing() {
        let backend = MemoryBackend::new();
        let value: Vec<i32> = read_json(&backend, keys::WISHLIST).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_read_json_surfaces_corrupt_data() {
        let backend = MemoryBackend::new();
        backend.set(keys::WISHLIST, "{not json").unwrap();

        let err = read_json::<Vec<i32>>(&backend, keys::WISHLIST).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_write_read_roundtrip() {
        let backend = MemoryBackend::new();
        write_json(&backend, keys::WISHLIST, &vec![4, 7]).unwrap();

        let value: Vec<i32> = read_json(&backend, keys::WISHLIST).unwrap();
        assert_eq!(value, vec![4, 7]);
    }
}
