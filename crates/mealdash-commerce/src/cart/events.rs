//! Cart change notifications.

use crate::ids::ItemId;

/// A change made to the cart, described for display.
///
/// Emitted after add, remove and clear mutations. The store never
/// consumes its own events; a notification collaborator (toast bar,
/// status line) renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added, or an existing line's quantity bumped.
    ItemAdded { id: ItemId, name: String },
    /// One unit of an item was removed, or its line deleted.
    ItemRemoved { id: ItemId, name: String },
    /// The whole cart was emptied.
    CartCleared,
}

impl CartEvent {
    /// Human-readable description of the change.
    pub fn message(&self) -> String {
        match self {
            CartEvent::ItemAdded { name, .. } => format!("Added {name} to cart"),
            CartEvent::ItemRemoved { name, .. } => format!("Removed {name} from cart"),
            CartEvent::CartCleared => "Cart cleared".to_string(),
        }
    }
}

/// Observer hook the store calls after each notifying mutation.
///
/// Called synchronously, after the store's state has settled: a notifier
/// that reads the store from elsewhere sees the post-mutation state.
/// The signature is infallible; a notifier must not make the mutation
/// fail.
pub trait CartNotifier: Send + Sync {
    fn notify(&self, event: &CartEvent);
}
