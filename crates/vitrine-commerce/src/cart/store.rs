//! The cart store.

use std::sync::Arc;

use crate::cart::envelope::{current_timestamp_ms, CartEnvelope, CART_STORAGE_KEY};
use crate::cart::item::{AddItem, LineItem, MAX_QUANTITY, MIN_QUANTITY};
use crate::cart::promo::{lookup_promo, PromoCode};
use crate::cart::pulse::{AddPulse, NullScheduler, PulseScheduler, PulseToken, PULSE_DURATION};
use crate::ids::ProductId;
use crate::money::Money;
use crate::notify::{Notice, Notifier, NullNotifier};
use vitrine_kv::KeyValue;

/// The cart state container.
///
/// Owns the ordered line items and the active promo code. Mutation happens
/// only through the operations below; totals are recomputed from the item
/// sequence on every read, so they can never drift from it. Every mutation
/// of the item sequence rewrites the persisted envelope with a fresh 7-day
/// expiry.
///
/// Failures never escape as errors here: invalid input is dropped with a
/// warning, bad persisted state reads as an empty cart, and storage write
/// failures are logged and swallowed. The in-memory state stays
/// authoritative.
pub struct CartStore<S: KeyValue> {
    storage: S,
    items: Vec<LineItem>,
    promo: Option<PromoCode>,
    pulse: AddPulse,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn PulseScheduler>,
}

impl<S: KeyValue> CartStore<S> {
    /// Restore a cart from `storage`, or start empty.
    ///
    /// The envelope is read once, here. It is accepted only while its expiry
    /// is in the future; an expired, missing, or unreadable envelope yields
    /// an empty cart and is never an error.
    pub fn restore(storage: S) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<CartEnvelope>(&bytes) {
                Ok(envelope) => match envelope.into_fresh_items(current_timestamp_ms()) {
                    Some(items) => items,
                    None => {
                        tracing::debug!("persisted cart expired, starting empty");
                        Vec::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable cart envelope");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart storage unavailable, starting empty");
                Vec::new()
            }
        };

        Self {
            storage,
            items,
            promo: None,
            pulse: AddPulse::new(),
            notifier: Arc::new(NullNotifier),
            scheduler: Arc::new(NullScheduler),
        }
    }

    /// Attach a notifier for user-facing messages.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Attach a scheduler for add-feedback pulse resets.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn PulseScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Add an item to the cart.
    ///
    /// A request whose price is not a finite, non-negative number is dropped
    /// whole: no state change, no persistence write, a warning on the
    /// notifier. Adding a product already in the cart merges quantities,
    /// capped at [`MAX_QUANTITY`]; new items are appended with their
    /// quantity clamped into range. Returns `true` if the cart changed.
    pub fn add_item(&mut self, request: AddItem) -> bool {
        let Some(price) = Money::from_decimal(request.price) else {
            tracing::warn!(id = %request.id, price = request.price, "rejected add: invalid price");
            self.notifier.notify(Notice::warning(format!(
                "Could not add {} to the cart",
                request.name
            )));
            return false;
        };

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == request.id) {
            let merged = existing
                .quantity
                .saturating_add(request.quantity)
                .min(MAX_QUANTITY);
            let capped = merged < existing.quantity.saturating_add(request.quantity);
            existing.quantity = merged;
            if capped {
                self.notifier.notify(Notice::warning(format!(
                    "{} is limited to {} per order",
                    request.name, MAX_QUANTITY
                )));
            } else {
                self.notifier
                    .notify(Notice::success(format!("{} added to cart", request.name)));
            }
        } else {
            let quantity = request.quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
            self.items.push(LineItem {
                id: request.id,
                name: request.name.clone(),
                description: request.description,
                image: request.image,
                price,
                quantity,
            });
            self.notifier
                .notify(Notice::success(format!("{} added to cart", request.name)));
        }

        let token = self.pulse.trigger();
        self.scheduler.schedule_reset(token, PULSE_DURATION);
        self.persist();
        true
    }

    /// Set the quantity of a line item exactly.
    ///
    /// Quantities outside [`MIN_QUANTITY`]..=[`MAX_QUANTITY`] are rejected
    /// without touching state; an absent id is a no-op. Returns `true` on
    /// change.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            tracing::warn!(%id, quantity, "rejected quantity update: out of range");
            return false;
        }
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove a line item. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            self.notifier.notify(Notice::success("Item removed from cart"));
            self.persist();
        }
        removed
    }

    /// Empty the cart: items, promo, and the persisted entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.promo = None;
        if let Err(e) = self.storage.delete(CART_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to delete persisted cart");
        }
        self.notifier.notify(Notice::success("Cart cleared"));
    }

    /// Apply a promo code, replacing any active one.
    ///
    /// Codes match case-insensitively against the published allow-list. An
    /// unknown code leaves state unchanged and surfaces a warning; the
    /// operation always returns normally.
    pub fn apply_promo_code(&mut self, code: &str) -> bool {
        match lookup_promo(code) {
            Some(promo) => {
                self.notifier.notify(Notice::success(format!(
                    "{} applied: {}% off",
                    promo.code, promo.percent
                )));
                self.promo = Some(promo);
                true
            }
            None => {
                self.notifier
                    .notify(Notice::warning(format!("\"{}\" is not a valid code", code.trim())));
                false
            }
        }
    }

    /// Clear the active promo code unconditionally.
    pub fn remove_promo_code(&mut self) {
        self.promo = None;
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The active promo code, if any.
    pub fn active_promo(&self) -> Option<&PromoCode> {
        self.promo.as_ref()
    }

    /// Whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals. Recomputed on every call.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Subtotal less the active promo discount.
    pub fn total(&self) -> Money {
        match &self.promo {
            Some(promo) => self.subtotal().percent_off(promo.percent),
            None => self.subtotal(),
        }
    }

    /// Sum of quantities across all line items.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether the add-feedback pulse is currently up.
    pub fn is_animating(&self) -> bool {
        self.pulse.is_active()
    }

    /// Deliver a scheduled pulse reset. Stale tokens are ignored.
    pub fn expire_pulse(&mut self, token: PulseToken) -> bool {
        self.pulse.expire(token)
    }

    /// Rewrite the persisted envelope with a fresh expiry. Write failures
    /// are logged and swallowed; the in-memory cart stays authoritative.
    fn persist(&self) {
        let envelope = CartEnvelope::wrap(&self.items, current_timestamp_ms());
        match serde_json::to_vec(&envelope) {
            Ok(bytes) => {
                if let Err(e) = self.storage.set(CART_STORAGE_KEY, &bytes) {
                    tracing::warn!(error = %e, "failed to persist cart");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize cart envelope"),
        }
    }
}
