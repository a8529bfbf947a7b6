//! Catalog browsing: filter and sort.
//!
//! A pure transformation of `(products, tag, sort)` into a display sequence.
//! No stored state; callers re-run it whenever the controls change.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort orders for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Catalog order, unchanged.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Newest first (identifier descending).
    Newest,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::Newest => "Newest",
        }
    }

    /// Parse a sort key as used in URLs and CLI flags.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(SortOrder::Featured),
            "price-asc" | "price_asc" => Some(SortOrder::PriceAsc),
            "price-desc" | "price_desc" => Some(SortOrder::PriceDesc),
            "newest" => Some(SortOrder::Newest),
            _ => None,
        }
    }
}

/// Filter and sort a product list for display.
///
/// The filter matches products whose feature tags or specification text
/// contain `tag` as a case-insensitive substring; `None` matches everything.
/// Sorting is stable, so ties keep catalog order.
pub fn browse(products: &[Product], tag: Option<&str>, sort: SortOrder) -> Vec<Product> {
    let mut listing: Vec<Product> = products
        .iter()
        .filter(|p| matches_tag(p, tag))
        .cloned()
        .collect();

    match sort {
        SortOrder::Featured => {}
        SortOrder::PriceAsc => listing.sort_by_key(|p| p.price),
        SortOrder::PriceDesc => listing.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortOrder::Newest => listing.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    listing
}

fn matches_tag(product: &Product, tag: Option<&str>) -> bool {
    let Some(tag) = tag else {
        return true;
    };
    let needle = tag.to_lowercase();
    product
        .features
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
        || product.spec_features.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("p-01", "Headphones", Money::from_cents(12999))
                .with_features(&["wireless", "noise-cancelling"])
                .with_spec_features("Bluetooth 5.3 / 40h battery"),
            Product::new("p-02", "Speaker", Money::from_cents(6999))
                .with_features(&["wireless", "waterproof"])
                .with_spec_features("IP67 waterproof / 12h battery"),
            Product::new("p-03", "Watch", Money::from_cents(19999))
                .with_features(&["waterproof", "gps"])
                .with_spec_features("AMOLED display / 7-day battery"),
        ]
    }

    #[test]
    fn test_no_tag_matches_all() {
        let products = fixture();
        assert_eq!(browse(&products, None, SortOrder::Featured).len(), 3);
    }

    #[test]
    fn test_tag_filter_is_case_insensitive() {
        let products = fixture();
        let lower = browse(&products, Some("waterproof"), SortOrder::Featured);
        let upper = browse(&products, Some("WATERPROOF"), SortOrder::Featured);
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_tag_matches_spec_text() {
        let products = fixture();
        // "bluetooth" only appears in the headphones' spec text.
        let hits = browse(&products, Some("bluetooth"), SortOrder::Featured);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Headphones");
    }

    #[test]
    fn test_tag_substring_match() {
        let products = fixture();
        // Substring of the "noise-cancelling" feature tag.
        let hits = browse(&products, Some("cancel"), SortOrder::Featured);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_sort_price_asc() {
        let products = fixture();
        let listing = browse(&products, None, SortOrder::PriceAsc);
        let prices: Vec<i64> = listing.iter().map(|p| p.price.cents()).collect();
        assert_eq!(prices, vec![6999, 12999, 19999]);
    }

    #[test]
    fn test_sort_price_desc() {
        let products = fixture();
        let listing = browse(&products, None, SortOrder::PriceDesc);
        let prices: Vec<i64> = listing.iter().map(|p| p.price.cents()).collect();
        assert_eq!(prices, vec![19999, 12999, 6999]);
    }

    #[test]
    fn test_sort_newest_is_id_descending() {
        let products = fixture();
        let listing = browse(&products, None, SortOrder::Newest);
        let ids: Vec<&str> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-03", "p-02", "p-01"]);
    }

    #[test]
    fn test_featured_keeps_input_order() {
        let products = fixture();
        let listing = browse(&products, None, SortOrder::Featured);
        let ids: Vec<&str> = listing.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-01", "p-02", "p-03"]);
    }

    #[test]
    fn test_browse_does_not_mutate_input() {
        let products = fixture();
        let before = products.clone();
        let _ = browse(&products, Some("wireless"), SortOrder::PriceDesc);
        assert_eq!(products, before);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("price-asc"), Some(SortOrder::PriceAsc));
        assert_eq!(SortOrder::parse("NEWEST"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::parse("bogus"), None);
    }
}
