//! Storefront domain types and logic for Vitrine.
//!
//! This crate is the logic surface of the storefront:
//!
//! - **Catalog**: read-only product records plus browse (filter/sort)
//! - **Cart**: the state container — line items, promo codes, derived
//!   totals, persistence with sliding expiry, add-feedback pulse
//! - **Notify**: fire-and-forget user-facing messages
//!
//! The view layer consumes all of this: it reads the catalog and cart state,
//! invokes the cart operations, and renders. Nothing here renders anything.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//! use vitrine_kv::FileStore;
//!
//! let catalog = Catalog::demo();
//! let storage = FileStore::open("~/.local/share/vitrine")?;
//! let mut cart = CartStore::restore(storage);
//!
//! let product = catalog.find(&ProductId::new("p-01")).unwrap();
//! cart.add_item(AddItem::from_product(product, 1));
//! cart.apply_promo_code("WELCOME10");
//! println!("Total: {}", cart.total());
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;
pub mod notify;

pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{browse, Catalog, Product, ProductImage, SortOrder};

    // Cart
    pub use crate::cart::{
        lookup_promo, published_promos, AddItem, CartStore, LineItem, PromoCode, PulseScheduler,
        PulseToken, QueueScheduler, MAX_QUANTITY, MIN_QUANTITY,
    };

    // Notifications
    pub use crate::notify::{BufferedNotifier, Notice, NoticeKind, Notifier, NullNotifier};
}
