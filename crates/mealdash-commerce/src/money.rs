//! Money type for monetary values.
//!
//! Amounts are integer cents, so cart math stays exact; converting to a
//! decimal only happens at the display edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currencies the storefront delivers in. All use two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    GBP,
    EUR,
}

/// Smallest-unit factor shared by all supported currencies.
const CENTS_PER_UNIT: i64 = 100;

impl Currency {
    /// Currency code, e.g. `"USD"`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
        }
    }

    /// Currency symbol, e.g. `"$"`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::GBP => "\u{00a3}",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "GBP" => Some(Currency::GBP),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use mealdash_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(12.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 1299);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64, currency)
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format for display, e.g. `"$12.99"`.
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Add, returning `None` if the currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        ))
    }

    /// Subtract, returning `None` if the currencies differ.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents.saturating_sub(other.amount_cents),
            self.currency,
        ))
    }

    /// Multiply by a scalar, e.g. a line quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Multiply by a fraction, rounding to the nearest cent.
    ///
    /// ```
    /// use mealdash_commerce::money::{Currency, Money};
    /// let subtotal = Money::new(2400, Currency::USD);
    /// assert_eq!(subtotal.scale(0.10).amount_cents, 240);
    /// ```
    pub fn scale(&self, rate: f64) -> Money {
        Money::new(
            (self.amount_cents as f64 * rate).round() as i64,
            self.currency,
        )
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies differ. Use [`Money::try_add`] for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies differ. Use [`Money::try_subtract`] instead.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(12.99, Currency::USD).amount_cents, 1299);
        assert_eq!(Money::from_decimal(2.999, Currency::USD).amount_cents, 300);
    }

    #[test]
    fn to_decimal_round_trips() {
        let m = Money::new(1299, Currency::USD);
        assert!((m.to_decimal() - 12.99).abs() < 1e-9);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Money::new(1299, Currency::USD).display(), "$12.99");
        assert_eq!(Money::new(50, Currency::GBP).display(), "\u{00a3}0.50");
    }

    #[test]
    fn addition_same_currency() {
        let total = Money::new(1000, Currency::USD) + Money::new(299, Currency::USD);
        assert_eq!(total.amount_cents, 1299);
    }

    #[test]
    #[should_panic(expected = "currency mismatch")]
    fn addition_across_currencies_panics() {
        let _ = Money::new(100, Currency::USD) + Money::new(100, Currency::EUR);
    }

    #[test]
    fn try_add_across_currencies_is_none() {
        let usd = Money::new(100, Currency::USD);
        let eur = Money::new(100, Currency::EUR);
        assert!(usd.try_add(&eur).is_none());
    }

    #[test]
    fn multiply_by_quantity() {
        let m = Money::new(400, Currency::USD) * 3;
        assert_eq!(m.amount_cents, 1200);
    }

    #[test]
    fn scale_rounds_to_nearest_cent() {
        // 10% of $24.00
        assert_eq!(Money::new(2400, Currency::USD).scale(0.10).amount_cents, 240);
        // 10% of $0.05 rounds to a whole cent
        assert_eq!(Money::new(5, Currency::USD).scale(0.10).amount_cents, 1);
    }

    #[test]
    fn currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("JPY"), None);
    }

    #[test]
    fn zero_is_zero() {
        assert!(Money::zero(Currency::USD).is_zero());
        assert!(!Money::new(1, Currency::USD).is_zero());
    }
}
