//! Checkout boundary.
//!
//! Prices the cart under the storefront's fee policy and hands the total
//! to the external payment collaborator. The cart store knows nothing of
//! fees or tax; all business policy lives here with the caller.

mod order;
mod summary;

pub use order::{Checkout, OrderReceipt, PaymentGateway, LAST_ORDER_KEY};
pub use summary::{FeeSchedule, OrderSummary};
