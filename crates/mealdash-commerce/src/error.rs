//! Commerce error types.
//!
//! The cart store itself is total and never returns an error; the
//! variants here cover the checkout boundary, which is the only part of
//! the domain that can actually fail.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted on an empty cart.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// Money values in two currencies were combined.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// The payment collaborator declined or failed the charge.
    #[error("payment failed: {0}")]
    PaymentFailed(String),
}
