//! Menu item records.

use serde::{Deserialize, Serialize};

use crate::cart::ItemDescriptor;
use crate::ids::{ItemId, RestaurantId};
use crate::money::Money;

/// One dish on a restaurant's menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Restaurant this item belongs to.
    pub restaurant_id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Short description for the menu card.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Display image reference.
    pub image: String,
    /// Menu section, e.g. "Mains".
    pub category: String,
}

impl MenuItem {
    /// The descriptor handed to the cart when the user taps "Add".
    ///
    /// The cart snapshots these fields on first add; later menu edits
    /// don't reach lines already in the cart.
    pub fn descriptor(&self) -> ItemDescriptor {
        ItemDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image_ref: Some(self.image.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn burger() -> MenuItem {
        MenuItem {
            id: ItemId::new("item-1"),
            restaurant_id: RestaurantId::new("rest-1"),
            name: "Classic Burger".to_string(),
            description: "Beef patty, cheddar, pickles".to_string(),
            price: Money::from_decimal(10.00, Currency::USD),
            image: "/images/burger.jpg".to_string(),
            category: "Mains".to_string(),
        }
    }

    #[test]
    fn descriptor_carries_identity_and_price() {
        let d = burger().descriptor();
        assert_eq!(d.id.as_str(), "item-1");
        assert_eq!(d.name, "Classic Burger");
        assert_eq!(d.unit_price.amount_cents, 1000);
        assert_eq!(d.image_ref.as_deref(), Some("/images/burger.jpg"));
    }
}
