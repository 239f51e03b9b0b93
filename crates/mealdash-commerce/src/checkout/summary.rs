//! Order summary math.

use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Fixed fees and rates the storefront applies at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Flat per-order delivery fee.
    pub delivery_fee: Money,
    /// Sales tax as a fraction of the subtotal (`0.10` = 10%).
    pub tax_rate: f64,
}

impl FeeSchedule {
    pub fn new(delivery_fee: Money, tax_rate: f64) -> Self {
        Self {
            delivery_fee,
            tax_rate,
        }
    }
}

impl Default for FeeSchedule {
    /// $2.99 delivery and 10% tax.
    fn default() -> Self {
        Self::new(Money::from_decimal(2.99, Currency::USD), 0.10)
    }
}

/// Priced breakdown shown on the order summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Cart subtotal before fees.
    pub subtotal: Money,
    /// Delivery fee from the schedule.
    pub delivery_fee: Money,
    /// Tax on the subtotal, rounded to the cent.
    pub tax: Money,
    /// Grand total: subtotal + delivery fee + tax.
    pub total: Money,
}

impl OrderSummary {
    /// Price the current cart under `fees`.
    ///
    /// Fails only when the fee schedule's currency disagrees with the
    /// cart's.
    pub fn compute(cart: &CartStore, fees: &FeeSchedule) -> Result<Self, CommerceError> {
        let subtotal = cart.cart_total();
        let tax = subtotal.scale(fees.tax_rate);
        let total = subtotal
            .try_add(&fees.delivery_fee)
            .and_then(|t| t.try_add(&tax))
            .ok_or_else(|| CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: fees.delivery_fee.currency.code().to_string(),
            })?;

        Ok(Self {
            subtotal,
            delivery_fee: fees.delivery_fee,
            tax,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ItemDescriptor;
    use crate::ids::ItemId;

    fn cart_with(items: &[(&str, f64, u32)]) -> CartStore {
        let mut cart = CartStore::new();
        for (id, dollars, quantity) in items {
            for _ in 0..*quantity {
                cart.add_item(ItemDescriptor {
                    id: ItemId::new(*id),
                    name: id.to_string(),
                    unit_price: Money::from_decimal(*dollars, Currency::USD),
                    image_ref: None,
                });
            }
        }
        cart
    }

    #[test]
    fn summary_matches_the_order_card() {
        // Two burgers and fries: subtotal 24.00, tax 2.40, delivery 2.99.
        let cart = cart_with(&[("a", 10.0, 2), ("b", 4.0, 1)]);
        let summary = OrderSummary::compute(&cart, &FeeSchedule::default()).unwrap();

        assert_eq!(summary.subtotal, Money::from_decimal(24.0, Currency::USD));
        assert_eq!(summary.tax, Money::from_decimal(2.40, Currency::USD));
        assert_eq!(summary.delivery_fee, Money::from_decimal(2.99, Currency::USD));
        assert_eq!(summary.total, Money::from_decimal(29.39, Currency::USD));
    }

    #[test]
    fn empty_cart_still_prices() {
        let cart = CartStore::new();
        let summary = OrderSummary::compute(&cart, &FeeSchedule::default()).unwrap();

        assert!(summary.subtotal.is_zero());
        assert!(summary.tax.is_zero());
        assert_eq!(summary.total, Money::from_decimal(2.99, Currency::USD));
    }

    #[test]
    fn mismatched_fee_currency_is_an_error() {
        let cart = cart_with(&[("a", 10.0, 1)]);
        let fees = FeeSchedule::new(Money::from_decimal(2.99, Currency::EUR), 0.10);

        let err = OrderSummary::compute(&cart, &fees).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn tax_rounds_to_the_cent() {
        // 10% of $0.05 is half a cent; rounds up to one.
        let cart = cart_with(&[("a", 0.05, 1)]);
        let summary = OrderSummary::compute(&cart, &FeeSchedule::default()).unwrap();
        assert_eq!(summary.tax.amount_cents, 1);
    }
}
