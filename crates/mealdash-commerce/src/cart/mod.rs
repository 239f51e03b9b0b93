//! Shopping cart module.
//!
//! The cart aggregation store, its change events, and its write-through
//! persistence handle.

mod events;
mod storage;
mod store;

pub use events::{CartEvent, CartNotifier};
pub use storage::{CartStorage, CART_STORAGE_KEY};
pub use store::{CartLine, CartStore, ItemDescriptor};
