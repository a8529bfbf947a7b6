//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// URL or asset path.
    pub url: String,
    /// Alt text for accessibility.
    pub alt: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// A product in the catalog. Read-only display data; the catalog has no
/// mutation interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// One-line blurb for listings.
    pub blurb: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Images, primary first.
    pub images: Vec<ProductImage>,
    /// Feature tags for filtering ("wireless", "waterproof", ...).
    pub features: Vec<String>,
    /// Specification features as free text, also searched by the filter.
    pub spec_features: String,
}

impl Product {
    /// Create a product with the required display fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            blurb: String::new(),
            description: String::new(),
            price,
            images: Vec::new(),
            features: Vec::new(),
            spec_features: String::new(),
        }
    }

    /// Set the listing blurb.
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = blurb.into();
        self
    }

    /// Set the full description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an image.
    pub fn with_image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.images.push(ProductImage::new(url, alt));
        self
    }

    /// Add feature tags.
    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features
            .extend(features.iter().map(|f| f.to_string()));
        self
    }

    /// Set the specification feature text.
    pub fn with_spec_features(mut self, spec: impl Into<String>) -> Self {
        self.spec_features = spec.into();
        self
    }

    /// The primary image, if any.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// The product catalog: a static, read-only list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new("p-01", "Aurora Wireless Headphones", Money::from_cents(12999))
            .with_blurb("Over-ear headphones with adaptive noise cancelling")
            .with_description(
                "Studio-tuned drivers wrapped in memory foam. Adaptive noise \
                 cancelling tracks your surroundings, and a single charge lasts \
                 a full work week.",
            )
            .with_image("/img/aurora-headphones.jpg", "Aurora Wireless Headphones")
            .with_features(&["wireless", "noise-cancelling", "bluetooth"])
            .with_spec_features("Bluetooth 5.3 / 40h battery / USB-C fast charge"),
        Product::new("p-02", "Drift Portable Speaker", Money::from_cents(6999))
            .with_blurb("Pocket-size speaker with room-filling sound")
            .with_description(
                "A palm-sized speaker that pairs in seconds and survives the \
                 beach, the shower, and the bottom of your bag.",
            )
            .with_image("/img/drift-speaker.jpg", "Drift Portable Speaker")
            .with_features(&["wireless", "waterproof", "bluetooth"])
            .with_spec_features("IP67 waterproof / 12h battery / stereo pairing"),
        Product::new("p-03", "Pulse Fitness Watch", Money::from_cents(19999))
            .with_blurb("Tracks heart rate, sleep, and 40 workout modes")
            .with_description(
                "An always-on display, week-long battery, and sensors that \
                 keep up whether you swim, climb, or just walk the dog.",
            )
            .with_image("/img/pulse-watch.jpg", "Pulse Fitness Watch")
            .with_features(&["waterproof", "gps", "heart-rate"])
            .with_spec_features("AMOLED display / 7-day battery / 5ATM water resistance"),
        Product::new("p-04", "Ember Smart Mug", Money::from_cents(2499))
            .with_blurb("Keeps your coffee at the exact temperature you like")
            .with_description(
                "Set a target temperature from the companion app and the mug \
                 holds it there for ninety minutes on a charge.",
            )
            .with_image("/img/ember-mug.jpg", "Ember Smart Mug")
            .with_features(&["smart-home", "rechargeable"])
            .with_spec_features("App controlled / 90min battery / ceramic coated"),
        Product::new("p-05", "Nimbus Mechanical Keyboard", Money::from_cents(8999))
            .with_blurb("Hot-swappable switches and a gasket-mounted deck")
            .with_description(
                "A compact 75% layout with pre-lubed switches, south-facing \
                 RGB, and a machined aluminium case.",
            )
            .with_image("/img/nimbus-keyboard.jpg", "Nimbus Mechanical Keyboard")
            .with_features(&["mechanical", "rgb", "usb-c"])
            .with_spec_features("Hot-swap PCB / gasket mount / PBT keycaps"),
        Product::new("p-06", "Orbit Desk Lamp", Money::from_cents(4599))
            .with_blurb("Glare-free light with automatic color temperature")
            .with_description(
                "An asymmetric beam lights your desk without lighting your \
                 screen. Warms up as the evening goes on.",
            )
            .with_image("/img/orbit-lamp.jpg", "Orbit Desk Lamp")
            .with_features(&["smart-home", "dimmable"])
            .with_spec_features("Auto color temperature / touch dimmer / USB passthrough"),
    ]
}
