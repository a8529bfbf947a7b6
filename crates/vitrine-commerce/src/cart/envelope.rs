//! Persisted cart envelope.

use crate::cart::LineItem;
use serde::{Deserialize, Serialize};

/// Fixed storage key for the cart envelope.
pub const CART_STORAGE_KEY: &str = "vitrine:cart";

/// Sliding expiration window: 7 days, refreshed on every write.
pub const CART_TTL_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// The serialized form of the cart plus its expiry timestamp.
///
/// Stored as JSON `{ "items": [...], "expiryDate": <epoch-ms> }`. Only the
/// item sequence persists; the active promo code is session state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEnvelope {
    pub items: Vec<LineItem>,
    #[serde(rename = "expiryDate")]
    pub expiry_date: i64,
}

impl CartEnvelope {
    /// Wrap the current items with a fresh expiry of now + [`CART_TTL_MS`].
    pub fn wrap(items: &[LineItem], now_ms: i64) -> Self {
        Self {
            items: items.to_vec(),
            expiry_date: now_ms + CART_TTL_MS,
        }
    }

    /// Unwrap the items if the envelope is still fresh at `now_ms`.
    ///
    /// An envelope is accepted only while `now_ms` is strictly before its
    /// expiry; anything else reads as an empty cart.
    pub fn into_fresh_items(self, now_ms: i64) -> Option<Vec<LineItem>> {
        if now_ms < self.expiry_date {
            Some(self.items)
        } else {
            None
        }
    }
}

/// Current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
