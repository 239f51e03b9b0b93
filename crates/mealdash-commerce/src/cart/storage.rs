//! Write-through persistence for the cart.

use mealdash_cache::Cache;
use tracing::warn;

use crate::cart::CartLine;

/// Default storage key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "mealdash:cart";

/// Handle the store writes through after every mutation.
///
/// Failures never leave this module: a read failure yields no lines, a
/// write failure is logged and dropped, and the in-memory cart stays
/// authoritative either way. Every write is a fresh attempt; there is no
/// retry and the last write wins.
#[derive(Clone)]
pub struct CartStorage {
    cache: Cache,
    key: String,
}

impl CartStorage {
    /// Persist under [`CART_STORAGE_KEY`].
    pub fn new(cache: Cache) -> Self {
        Self::with_key(cache, CART_STORAGE_KEY)
    }

    /// Persist under a caller-chosen key.
    pub fn with_key(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted lines. Absent or unreadable records yield `None`.
    pub(crate) fn load(&self) -> Option<Vec<CartLine>> {
        match self.cache.get::<Vec<CartLine>>(&self.key) {
            Ok(lines) => lines,
            Err(err) => {
                warn!(key = %self.key, %err, "discarding unreadable cart record");
                None
            }
        }
    }

    /// Persist the given lines, best-effort.
    pub(crate) fn store(&self, lines: &[CartLine]) {
        if let Err(err) = self.cache.set(&self.key, &lines) {
            warn!(key = %self.key, %err, "cart write-through failed");
        }
    }
}
