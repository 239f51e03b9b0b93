//! Order placement against the external payment collaborator.

use mealdash_cache::Cache;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cart::CartStore;
use crate::checkout::{FeeSchedule, OrderSummary};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// Storage key for the receipt of the most recently placed order,
/// read by the checkout success page.
pub const LAST_ORDER_KEY: &str = "mealdash:last_order";

/// Seam to the external payment/order service.
///
/// `charge` settles the summary's total and returns the provider's
/// confirmation token; a declined or failed charge comes back as
/// [`CommerceError::PaymentFailed`].
pub trait PaymentGateway {
    fn charge(&self, summary: &OrderSummary) -> Result<String, CommerceError>;
}

/// What the success page shows; persisted under [`LAST_ORDER_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    /// Provider confirmation token from the charge.
    pub confirmation: String,
    /// Item count at the moment the order was placed.
    pub total_items: u32,
    /// Grand total charged.
    pub total_amount: Money,
}

/// Checkout trigger: prices the cart under a fee schedule, charges the
/// gateway, and clears the cart once the charge sticks.
pub struct Checkout<G> {
    fees: FeeSchedule,
    gateway: G,
    receipts: Option<Cache>,
}

impl<G: PaymentGateway> Checkout<G> {
    pub fn new(fees: FeeSchedule, gateway: G) -> Self {
        Self {
            fees,
            gateway,
            receipts: None,
        }
    }

    /// Also stash each receipt under [`LAST_ORDER_KEY`] in `cache`.
    pub fn with_receipt_cache(mut self, cache: Cache) -> Self {
        self.receipts = Some(cache);
        self
    }

    /// Price the cart without placing an order.
    pub fn summary(&self, cart: &CartStore) -> Result<OrderSummary, CommerceError> {
        OrderSummary::compute(cart, &self.fees)
    }

    /// Place an order for the cart's current contents.
    ///
    /// An empty cart is rejected. A gateway failure propagates and
    /// leaves the cart untouched; on success the cart is cleared (which
    /// notifies observers) and the receipt is written through
    /// best-effort, like every persistence write.
    pub fn place_order(&self, cart: &mut CartStore) -> Result<OrderReceipt, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let summary = self.summary(cart)?;
        let confirmation = self.gateway.charge(&summary)?;

        let receipt = OrderReceipt {
            order_id: OrderId::generate(),
            confirmation,
            total_items: cart.total_items(),
            total_amount: summary.total,
        };

        cart.clear();

        if let Some(cache) = &self.receipts {
            if let Err(err) = cache.set(LAST_ORDER_KEY, &receipt) {
                warn!(%err, "failed to persist last-order receipt");
            }
        }

        info!(order = %receipt.order_id, total = %receipt.total_amount, "order placed");
        Ok(receipt)
    }
}
