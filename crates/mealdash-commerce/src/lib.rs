//! Storefront domain types and logic for mealdash.
//!
//! The heart of this crate is the cart aggregation store:
//!
//! - **Cart**: insertion-ordered lines keyed by item id, merge-on-add,
//!   derived totals, change events, optional write-through persistence
//! - **Catalog**: restaurant and menu records as collaborators hand them
//!   to the UI, and the conversion into cart descriptors
//! - **Checkout**: fee/tax policy, order summary math, and the payment
//!   gateway seam
//!
//! Fetching catalog data, rendering, routing and identity are external
//! collaborators; this crate only defines the types they exchange with
//! the cart.
//!
//! # Example
//!
//! ```rust,ignore
//! use mealdash_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_item(menu_item.descriptor());
//! cart.add_item(menu_item.descriptor());
//!
//! assert_eq!(cart.total_items(), 2);
//! println!("Subtotal: {}", cart.cart_total());
//!
//! let checkout = Checkout::new(FeeSchedule::default(), gateway);
//! let receipt = checkout.place_order(&mut cart)?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartEvent, CartLine, CartNotifier, CartStorage, CartStore, ItemDescriptor,
        CART_STORAGE_KEY,
    };

    // Catalog
    pub use crate::catalog::{MenuItem, Restaurant};

    // Checkout
    pub use crate::checkout::{
        Checkout, FeeSchedule, OrderReceipt, OrderSummary, PaymentGateway, LAST_ORDER_KEY,
    };
}
