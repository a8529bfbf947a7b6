//! End-to-end cart flow: browse, fill the cart, discount, restore, clear.

use std::sync::Arc;

use vitrine_commerce::cart::CART_STORAGE_KEY as CART_KEY;
use vitrine_commerce::prelude::*;
use vitrine_kv::{KeyValue, MemoryStore};

#[test]
fn test_shopping_session_roundtrip() {
    let catalog = Catalog::demo();
    let storage = Arc::new(MemoryStore::new());
    let notifier = Arc::new(BufferedNotifier::new());

    // First session: browse for wireless gear and put two products in.
    {
        let mut cart = CartStore::restore(storage.clone()).with_notifier(notifier.clone());

        let listing = browse(catalog.products(), Some("wireless"), SortOrder::PriceAsc);
        assert!(listing.len() >= 2);
        let cheapest = &listing[0];
        let priciest = &listing[listing.len() - 1];
        assert!(cheapest.price <= priciest.price);

        assert!(cart.add_item(AddItem::from_product(cheapest, 2)));
        assert!(cart.add_item(AddItem::from_product(priciest, 1)));
        assert_eq!(cart.total_item_count(), 3);

        let expected = cheapest.price.times(2) + priciest.price.times(1);
        assert_eq!(cart.subtotal(), expected);

        // Promo applies to the total but is not persisted.
        assert!(cart.apply_promo_code("save20"));
        assert_eq!(cart.total(), expected.percent_off(20));

        let notices = notifier.drain();
        assert!(notices
            .iter()
            .all(|n| n.kind == NoticeKind::Success));
    }

    // Second session: items survive, promo does not.
    {
        let mut cart = CartStore::restore(storage.clone());
        assert_eq!(cart.total_item_count(), 3);
        assert!(cart.active_promo().is_none());
        assert_eq!(cart.total(), cart.subtotal());

        cart.clear();
        assert!(cart.is_empty());
        assert!(!storage.exists(CART_KEY).unwrap());
    }

    // Third session: nothing left to restore.
    let cart = CartStore::restore(storage);
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Money::ZERO);
}

#[test]
fn test_rejected_add_keeps_session_consistent() {
    let storage = Arc::new(MemoryStore::new());
    let notifier = Arc::new(BufferedNotifier::new());
    let mut cart = CartStore::restore(storage.clone()).with_notifier(notifier.clone());

    let bogus = AddItem {
        id: ProductId::new("p-nan"),
        name: "Glitch".to_string(),
        description: String::new(),
        image: String::new(),
        price: f64::NAN,
        quantity: 1,
    };
    assert!(!cart.add_item(bogus));
    assert!(cart.is_empty());
    assert!(!storage.exists(CART_KEY).unwrap());

    let notices = notifier.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Warning);
}

#[test]
fn test_pulse_feedback_through_scheduler_queue() {
    let scheduler = Arc::new(QueueScheduler::new());
    let catalog = Catalog::demo();
    let mut cart = CartStore::restore(MemoryStore::new()).with_scheduler(scheduler.clone());

    let product = &catalog.products()[0];
    cart.add_item(AddItem::from_product(product, 1));
    cart.add_item(AddItem::from_product(product, 1));
    assert!(cart.is_animating());

    // Drain the queue the way a UI timer loop would; only the newest token
    // actually lowers the flag.
    let mut lowered = 0;
    for (token, _delay) in scheduler.drain() {
        if cart.expire_pulse(token) {
            lowered += 1;
        }
    }
    assert_eq!(lowered, 1);
    assert!(!cart.is_animating());
}
