//! User-facing notifications.
//!
//! Cart operations surface their outcome as fire-and-forget messages, not
//! errors: the caller is a UI event handler with no recovery path. The
//! [`Notifier`] seam lets the embedding view layer decide how to show them.

use std::sync::Mutex;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The operation succeeded.
    Success,
    /// The operation was rejected or degraded; state may be unchanged.
    Warning,
}

/// A user-facing message. Informational only, never part of control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notices.
pub trait Notifier {
    /// Deliver a notice. Must not fail and must not block.
    fn notify(&self, notice: Notice);
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// Collects notices for later display.
///
/// The CLI drains this after each command; tests use it to assert on the
/// messages an operation produced.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl BufferedNotifier {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(mut notices) => std::mem::take(&mut *notices),
            Err(_) => Vec::new(),
        }
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_notifier_collects_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Notice::success("added"));
        notifier.notify(Notice::warning("rejected"));

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0], Notice::success("added"));
        assert_eq!(notices[1].kind, NoticeKind::Warning);
    }

    #[test]
    fn test_drain_empties_buffer() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Notice::success("one"));
        assert_eq!(notifier.drain().len(), 1);
        assert!(notifier.drain().is_empty());
    }
}
