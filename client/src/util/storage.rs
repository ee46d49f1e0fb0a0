//! Key-value persistence backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules persist through the `KeyValueStore` seam instead of calling
//! web-sys directly, so the same store logic runs in the browser, during SSR
//! (where nothing is persisted) and in unit tests (`MemoryStorage`).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors raised while writing to a key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, SSR).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the write (quota exceeded, security error).
    #[error("storage write failed: {0}")]
    Write(String),

    /// The value could not be serialized.
    #[error("storage encode failed: {0}")]
    Encode(String),
}

/// Minimal synchronous string store, shaped after the Web Storage API.
pub trait KeyValueStore {
    /// Read the raw value at `key`, or `None` when absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write `value` at `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend is missing or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Serialize `value` as JSON and write it at `key`.
///
/// # Errors
///
/// Returns a `StorageError` if encoding or the underlying write fails.
pub fn save_json<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    storage.set_item(key, &raw)
}

/// Read and decode the JSON value at `key`.
///
/// Returns `None` when the key is absent or holds an empty string, and
/// `Some(Err(_))` when a value is present but does not decode as `T`.
pub fn load_json<S, T>(storage: &S, key: &str) -> Option<Result<T, serde_json::Error>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = storage.get_item(key).filter(|raw| !raw.is_empty())?;
    Some(serde_json::from_str(&raw))
}

/// `window.localStorage`. Every call re-resolves the window; outside the
/// `hydrate` build there is no browser and the store is always unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store. Clones share the same entries, so a test can keep a
/// handle and inspect what a store wrote.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    items: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with a single entry.
    pub(crate) fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.insert(key, value);
        storage
    }

    pub(crate) fn insert(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}
