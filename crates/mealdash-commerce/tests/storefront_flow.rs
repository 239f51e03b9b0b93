//! End-to-end storefront flow: menu → cart → restart → checkout.

use mealdash_cache::Cache;
use mealdash_commerce::prelude::*;

fn menu() -> (Restaurant, Vec<MenuItem>) {
    let restaurant = Restaurant {
        id: RestaurantId::new("rest-1"),
        name: "Burger Palace".to_string(),
        cuisine: "American".to_string(),
        rating: 4.6,
        delivery_time: "15-25 min".to_string(),
        delivery_fee: Money::from_decimal(2.99, Currency::USD),
        image: "/images/burger-palace.jpg".to_string(),
        featured: false,
    };
    let items = vec![
        MenuItem {
            id: ItemId::new("item-burger"),
            restaurant_id: restaurant.id.clone(),
            name: "Classic Burger".to_string(),
            description: "Beef patty, cheddar, pickles".to_string(),
            price: Money::from_decimal(10.0, Currency::USD),
            image: "/images/burger.jpg".to_string(),
            category: "Mains".to_string(),
        },
        MenuItem {
            id: ItemId::new("item-fries"),
            restaurant_id: restaurant.id.clone(),
            name: "Fries".to_string(),
            description: "Crispy, salted".to_string(),
            price: Money::from_decimal(4.0, Currency::USD),
            image: "/images/fries.jpg".to_string(),
            category: "Sides".to_string(),
        },
    ];
    (restaurant, items)
}

/// Gateway stand-in that approves everything.
struct DemoGateway;

impl PaymentGateway for DemoGateway {
    fn charge(&self, summary: &OrderSummary) -> Result<String, CommerceError> {
        Ok(format!("demo-{}", summary.total.amount_cents))
    }
}

#[test]
fn browse_fill_restart_and_check_out() {
    let dir = tempfile::tempdir().unwrap();
    let (_restaurant, items) = menu();

    // Session one: the user fills the cart from the menu.
    {
        let cache = Cache::file(dir.path()).unwrap();
        let mut cart = CartStore::restore(CartStorage::new(cache));

        cart.add_item(items[0].descriptor());
        cart.add_item(items[0].descriptor());
        cart.add_item(items[1].descriptor());

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.cart_total(), Money::from_decimal(24.0, Currency::USD));
    }

    // Session two: a fresh process rehydrates the same cart from disk
    // and checks out.
    let cache = Cache::file(dir.path()).unwrap();
    let mut cart = CartStore::restore(CartStorage::new(cache.clone()));

    assert_eq!(cart.total_items(), 3);
    let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["item-burger", "item-fries"]);

    let checkout =
        Checkout::new(FeeSchedule::default(), DemoGateway).with_receipt_cache(cache.clone());
    let receipt = checkout.place_order(&mut cart).unwrap();

    // 24.00 subtotal + 2.99 delivery + 2.40 tax.
    assert_eq!(receipt.total_amount, Money::from_decimal(29.39, Currency::USD));
    assert_eq!(receipt.total_items, 3);
    assert!(cart.is_empty());

    // The cleared cart was written through, and the success page can
    // read the receipt back.
    let persisted: Vec<CartLine> = cache.get(CART_STORAGE_KEY).unwrap().unwrap();
    assert!(persisted.is_empty());

    let last: OrderReceipt = cache.get(LAST_ORDER_KEY).unwrap().unwrap();
    assert_eq!(last, receipt);
}

#[test]
fn remove_to_zero_then_check_out_fails_cleanly() {
    let (_restaurant, items) = menu();
    let mut cart = CartStore::new();

    cart.add_item(items[0].descriptor());
    cart.remove_item(&items[0].id);
    assert!(cart.is_empty());

    let checkout = Checkout::new(FeeSchedule::default(), DemoGateway);
    assert!(matches!(
        checkout.place_order(&mut cart),
        Err(CommerceError::EmptyCart)
    ));
}
