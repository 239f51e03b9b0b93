//! The cart aggregation store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{CartEvent, CartNotifier, CartStorage};
use crate::ids::ItemId;
use crate::money::Money;

/// Descriptor for a purchasable item, produced by catalog collaborators
/// when the user selects it. Quantity is store-managed and deliberately
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    pub image_ref: Option<String>,
}

/// One entry in the cart: an item identity, a quantity, and the
/// display/price snapshot captured when the item was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
    /// Always `>= 1`; a line that would reach zero is removed instead.
    pub quantity: u32,
    pub image_ref: Option<String>,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// In-memory cart store.
///
/// Lines are kept in insertion order with exactly one line per item id.
/// Totals are derived on demand, never stored. Mutations are synchronous
/// and atomic with respect to observers: by the time a call returns, any
/// reader of the store sees the post-mutation state, and the notifier
/// (if any) has already run.
///
/// Constructed explicitly per session — [`CartStore::new`] for a fresh
/// cart, [`CartStore::restore`] to rehydrate from persisted state — and
/// handed to whichever components need it.
pub struct CartStore {
    lines: Vec<CartLine>,
    notifier: Option<Box<dyn CartNotifier>>,
    storage: Option<CartStorage>,
}

impl CartStore {
    /// An empty store with no persistence.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            notifier: None,
            storage: None,
        }
    }

    /// A store that writes through to `storage` after every mutation,
    /// initialized from the persisted record when one exists and parses.
    /// A missing or unreadable record yields an empty cart, not an error.
    pub fn restore(storage: CartStorage) -> Self {
        let lines = storage.load().unwrap_or_default();
        debug!(key = %storage.key(), lines = lines.len(), "cart rehydrated");
        Self {
            lines,
            notifier: None,
            storage: Some(storage),
        }
    }

    /// Attach a notifier that receives a [`CartEvent`] after add, remove
    /// and clear mutations.
    pub fn with_notifier(mut self, notifier: impl CartNotifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Add one unit of the described item.
    ///
    /// A new id appends a line with quantity 1; a repeated id bumps the
    /// existing line's quantity. The line keeps the name, price and image
    /// captured on first add, whatever a later descriptor says.
    pub fn add_item(&mut self, descriptor: ItemDescriptor) {
        let event = match self.lines.iter_mut().find(|l| l.id == descriptor.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                CartEvent::ItemAdded {
                    id: line.id.clone(),
                    name: line.name.clone(),
                }
            }
            None => {
                let ItemDescriptor {
                    id,
                    name,
                    unit_price,
                    image_ref,
                } = descriptor;
                self.lines.push(CartLine {
                    id: id.clone(),
                    name: name.clone(),
                    unit_price,
                    quantity: 1,
                    image_ref,
                });
                CartEvent::ItemAdded { id, name }
            }
        };
        self.write_through();
        self.emit(event);
    }

    /// Take one unit of `id` out of the cart.
    ///
    /// The line disappears when its last unit goes. An absent id is a
    /// no-op, so callers never need an existence check first.
    pub fn remove_item(&mut self, id: &ItemId) {
        let Some(pos) = self.lines.iter().position(|l| &l.id == id) else {
            return;
        };
        let event = if self.lines[pos].quantity > 1 {
            let line = &mut self.lines[pos];
            line.quantity -= 1;
            CartEvent::ItemRemoved {
                id: line.id.clone(),
                name: line.name.clone(),
            }
        } else {
            let line = self.lines.remove(pos);
            CartEvent::ItemRemoved {
                id: line.id,
                name: line.name,
            }
        };
        self.write_through();
        self.emit(event);
    }

    /// Set the quantity of an existing line directly.
    ///
    /// A quantity of zero or less deletes the line. A positive quantity
    /// for an id not in the cart is a no-op: only [`CartStore::add_item`]
    /// establishes a line's snapshot fields.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) {
        let Some(pos) = self.lines.iter().position(|l| &l.id == id) else {
            return;
        };
        if quantity <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.write_through();
    }

    /// Empty the cart. Always succeeds; clearing an empty cart is fine.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.write_through();
        self.emit(CartEvent::CartCleared);
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total item count: the sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal: unit price times quantity, summed over all lines.
    ///
    /// Exact integer math in the currency of the first line; zero for an
    /// empty cart.
    pub fn cart_total(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.unit_price.currency)
            .unwrap_or_default();
        let cents = self
            .lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.line_total().amount_cents));
        Money::new(cents, currency)
    }

    fn write_through(&self) {
        if let Some(storage) = &self.storage {
            storage.store(&self.lines);
        }
    }

    fn emit(&self, event: CartEvent) {
        debug!(event = %event.message(), items = self.total_items(), "cart changed");
        if let Some(notifier) = &self.notifier {
            notifier.notify(&event);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
