//! Add-to-cart feedback pulse.
//!
//! Adding an item raises a short-lived "animating" flag so the view layer
//! can flash the cart badge. The flag is presentation state with one rule:
//! a reset only lands if no newer add has happened since it was scheduled.
//! Tokens encode that rule; everything timing-related lives behind the
//! [`PulseScheduler`] seam so the core stays synchronous.

use std::sync::Mutex;
use std::time::Duration;

/// How long the pulse stays active before its scheduled reset.
pub const PULSE_DURATION: Duration = Duration::from_millis(300);

/// Identifies one pulse activation. Monotonically increasing per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PulseToken(u64);

/// Two-state machine: idle, or active under a specific token.
#[derive(Debug, Default)]
pub struct AddPulse {
    active: Option<PulseToken>,
    issued: u64,
}

impl AddPulse {
    /// Create an idle pulse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate, superseding any pending reset, and return the new token.
    pub fn trigger(&mut self) -> PulseToken {
        self.issued += 1;
        let token = PulseToken(self.issued);
        self.active = Some(token);
        token
    }

    /// Reset to idle if `token` is still the active one.
    ///
    /// Returns `true` if the pulse went idle; a stale token (superseded by a
    /// later `trigger`) is ignored and leaves the flag up.
    pub fn expire(&mut self, token: PulseToken) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Whether the pulse is currently active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Schedules pulse resets on behalf of the store.
///
/// Implementations deliver `token` back to
/// [`CartStore::expire_pulse`](crate::cart::CartStore::expire_pulse) after
/// `delay`, on whatever timer the embedding runtime has. Fire-and-forget; no
/// ordering guarantee relative to later mutations is required.
pub trait PulseScheduler {
    fn schedule_reset(&self, token: PulseToken, delay: Duration);
}

/// Drops every reset request. The default when no view layer is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScheduler;

impl PulseScheduler for NullScheduler {
    fn schedule_reset(&self, _token: PulseToken, _delay: Duration) {}
}

/// Queues reset requests for the embedder to drain into its own timer.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    pending: Mutex<Vec<(PulseToken, Duration)>>,
}

impl QueueScheduler {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending reset requests, oldest first.
    pub fn drain(&self) -> Vec<(PulseToken, Duration)> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }
}

impl PulseScheduler for QueueScheduler {
    fn schedule_reset(&self, token: PulseToken, delay: Duration) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push((token, delay));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_then_expire() {
        let mut pulse = AddPulse::new();
        assert!(!pulse.is_active());

        let token = pulse.trigger();
        assert!(pulse.is_active());
        assert!(pulse.expire(token));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut pulse = AddPulse::new();
        let first = pulse.trigger();
        let second = pulse.trigger();

        // The first reset arrives after a second add superseded it.
        assert!(!pulse.expire(first));
        assert!(pulse.is_active());

        assert!(pulse.expire(second));
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_expire_when_idle_is_noop() {
        let mut pulse = AddPulse::new();
        let token = pulse.trigger();
        assert!(pulse.expire(token));
        assert!(!pulse.expire(token));
    }

    #[test]
    fn test_queue_scheduler_collects() {
        let scheduler = QueueScheduler::new();
        let mut pulse = AddPulse::new();

        let token = pulse.trigger();
        scheduler.schedule_reset(token, PULSE_DURATION);

        let pending = scheduler.drain();
        assert_eq!(pending, vec![(token, PULSE_DURATION)]);
        assert!(scheduler.drain().is_empty());
    }
}
