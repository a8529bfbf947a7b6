//! Promo codes.

use serde::{Deserialize, Serialize};

/// A discount token mapped to a percentage off the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    /// Canonical code, as published.
    pub code: String,
    /// Percentage off (0..=100).
    pub percent: u8,
}

impl PromoCode {
    fn new(code: &str, percent: u8) -> Self {
        Self {
            code: code.to_string(),
            percent,
        }
    }
}

/// Currently published codes. The cart accepts nothing outside this list.
const PROMO_ALLOW_LIST: &[(&str, u8)] = &[
    ("WELCOME10", 10),
    ("SAVE20", 20),
    ("VIP25", 25),
];

/// Look up a code case-insensitively against the allow-list.
///
/// Returns the canonical [`PromoCode`] on a match; input casing is not
/// preserved.
pub fn lookup_promo(code: &str) -> Option<PromoCode> {
    let code = code.trim();
    PROMO_ALLOW_LIST
        .iter()
        .find(|(published, _)| published.eq_ignore_ascii_case(code))
        .map(|(published, percent)| PromoCode::new(published, *percent))
}

/// All published codes, for display.
pub fn published_promos() -> Vec<PromoCode> {
    PROMO_ALLOW_LIST
        .iter()
        .map(|(code, percent)| PromoCode::new(code, *percent))
        .collect()
}
