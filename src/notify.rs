//! Transient, auto-expiring user notifications (toasts).
//!
//! Every notification expires `timeout` after its `created_at`. The event
//! loop asks for the earliest deadline and sleeps until then instead of
//! ticking. Removal is always keyed by id.

use std::time::{Duration, Instant};

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Session-unique notification identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

pub struct NotificationQueue {
    timeout: Duration,
    max_visible: Option<usize>,
    next_id: u64,
    entries: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue. `max_visible = None` keeps it unbounded.
    pub fn new(timeout: Duration, max_visible: Option<usize>) -> Self {
        Self {
            timeout,
            max_visible,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Append a notification created at `now`.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            created_at: now,
        });

        if let Some(cap) = self.max_visible {
            while self.entries.len() > cap {
                self.entries.remove(0);
            }
        }

        id
    }

    /// When `n` goes away. `None` if the deadline is past what `Instant`
    /// can represent, in which case it stays until dismissed.
    fn deadline(&self, n: &Notification) -> Option<Instant> {
        n.created_at.checked_add(self.timeout)
    }

    /// Remove `id` early.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Dismiss the oldest visible notification, if any.
    pub fn dismiss_oldest(&mut self) -> Option<NotificationId> {
        let id = self.entries.first()?.id;
        self.dismiss(id);
        Some(id)
    }

    /// Remove every notification whose deadline is at or before `now`.
    /// Returns the removed ids in display order.
    pub fn expire(&mut self, now: Instant) -> Vec<NotificationId> {
        let expired: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|n| self.deadline(n).is_some_and(|d| d <= now))
            .map(|n| n.id)
            .collect();
        self.entries.retain(|n| !expired.contains(&n.id));
        expired
    }

    /// The earliest pending expiry.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().filter_map(|n| self.deadline(n)).min()
    }

    /// Visible notifications in insertion (display) order.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, None)
    }
}
