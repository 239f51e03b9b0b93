//! Restaurant listing records.

use serde::{Deserialize, Serialize};

use crate::ids::RestaurantId;
use crate::money::Money;

/// A restaurant as shown on browse and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Cuisine label, e.g. "Italian".
    pub cuisine: String,
    /// Average rating out of 5.
    pub rating: f32,
    /// Estimated delivery window, e.g. "25-35 min".
    pub delivery_time: String,
    /// Per-order delivery fee for this restaurant.
    pub delivery_fee: Money,
    /// Display image reference.
    pub image: String,
    /// Whether the restaurant is featured on the landing page.
    pub featured: bool,
}

impl Restaurant {
    /// Create a restaurant record with listing defaults.
    pub fn new(
        id: impl Into<RestaurantId>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        delivery_fee: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            rating: 0.0,
            delivery_time: String::new(),
            delivery_fee,
            image: String::new(),
            featured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn new_defaults_to_unfeatured() {
        let r = Restaurant::new(
            "rest-1",
            "Bella Italia",
            "Italian",
            Money::from_decimal(2.99, Currency::USD),
        );
        assert!(!r.featured);
        assert_eq!(r.delivery_fee.amount_cents, 299);
    }
}
