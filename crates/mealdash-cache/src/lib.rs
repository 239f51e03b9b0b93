//! Type-safe key-value persistence for mealdash.
//!
//! A thin layer over pluggable byte stores with automatic JSON
//! serialization. The storefront writes its cart through this layer after
//! every mutation and stashes the last-order receipt here for the
//! checkout success page.
//!
//! # Example
//!
//! ```rust,ignore
//! use mealdash_cache::Cache;
//!
//! // Durable across restarts:
//! let cache = Cache::file("/var/lib/mealdash")?;
//!
//! cache.set("mealdash:cart", &lines)?;
//! let lines: Option<Vec<CartLine>> = cache.get("mealdash:cart")?;
//! cache.delete("mealdash:cart")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, Cache, CacheError, FileBackend, MemoryBackend};
}
