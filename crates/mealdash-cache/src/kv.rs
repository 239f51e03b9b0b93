//! Key-value store wrapper with automatic serialization.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::CacheError;

/// Type-safe store over a [`Backend`].
///
/// Values are serialized as JSON, so anything `Serialize +
/// DeserializeOwned` round-trips. Cloning is cheap; clones share the
/// same backend.
#[derive(Clone)]
pub struct Cache {
    backend: Arc<dyn Backend>,
}

impl Cache {
    /// Build a cache over an arbitrary backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Process-local cache. Contents are lost when the process exits.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Durable cache rooted at a directory on disk.
    pub fn file(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(Arc::new(FileBackend::new(root)?)))
    }

    /// Get a value, or `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = cache.get("mealdash:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.read(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value, replacing any previous record under the key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.write(key, &bytes)
    }

    /// Delete a value. Deleting an absent key succeeds.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.backend.remove(key)
    }

    /// Check whether a key has a record.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.backend.read(key)?.is_some())
    }
}

/// Helper to build namespaced cache keys.
///
/// # Example
///
/// ```rust,ignore
/// let key = cache_key!("cart", session_id);
/// // "cart:sess_abc123"
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
