//! Transient notification channel
//!
//! One slot per application. Publishing replaces the current message and
//! schedules its expiry; a newer message is never cleared by the expiry
//! timer of an older one.

pub mod banner;

pub use banner::NotificationBanner;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Identifies one publish; only the matching ticket may expire the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket(u64);

// ============================================================================
// Slot
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    pub fn publish(&mut self, notification: Notification) -> NotificationTicket {
        self.generation += 1;
        self.current = Some(notification);
        NotificationTicket(self.generation)
    }

    /// Clear the slot if `ticket` still identifies the displayed message
    pub fn expire(&mut self, ticket: NotificationTicket) -> bool {
        if ticket.0 == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

// ============================================================================
// Reactive channel
// ============================================================================

/// App-wide notifier, provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            ttl_ms,
        }
    }

    pub fn publish(&self, notification: Notification) {
        log::debug!("notification ({:?}): {}", notification.kind, notification.text);
        let Some(ticket) = self.slot.try_update(|slot| slot.publish(notification)) else {
            return;
        };

        let slot = self.slot;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            slot.try_update(|slot| slot.expire(ticket));
        });
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(Notification::error(text));
    }

    pub fn clear(&self) {
        self.slot.update(NotificationSlot::clear);
    }

    /// Currently displayed message (tracked)
    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}
