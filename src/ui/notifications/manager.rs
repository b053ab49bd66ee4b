// SPDX-License-Identifier: MPL-2.0
//! Ordering and expiry of toasts.
//!
//! Toasts are kept oldest first; the first [`MAX_VISIBLE`] are on screen and
//! the rest wait. A toast's lifetime starts when it becomes visible, so a
//! burst of failures does not expire while still queued.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

/// Key prefix of image load failures, dropped when the overlay closes.
const LOAD_ERROR_PREFIX: &str = "notification-load-error-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        match (self.shown_at, self.notification.severity().lifetime()) {
            (Some(shown_at), Some(lifetime)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: VecDeque<Entry>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        if matches!(notification.severity(), Severity::Warning | Severity::Error) {
            tracing::warn!(
                key = notification.message_key(),
                args = ?notification.message_args(),
                "showing notification"
            );
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Entry {
            id,
            notification,
            shown_at: None,
        });
        self.reveal(Instant::now());
        id
    }

    /// Returns `false` if `id` is unknown (already dismissed or expired).
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.reveal(Instant::now());
        self.entries.len() != before
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Drops visible toasts whose lifetime ended before `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.is_expired(now));
        self.reveal(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.entries
            .iter()
            .take(MAX_VISIBLE)
            .map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len().min(MAX_VISIBLE)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.entries.len().saturating_sub(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn clear_load_errors(&mut self) {
        self.entries
            .retain(|entry| !entry.notification.message_key().starts_with(LOAD_ERROR_PREFIX));
        self.reveal(Instant::now());
    }

    /// Starts the clock of toasts that just moved on screen.
    fn reveal(&mut self, now: Instant) {
        for entry in self.entries.iter_mut().take(MAX_VISIBLE) {
            entry.shown_at.get_or_insert(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn info(key: &str) -> Notification {
        Notification::new(Severity::Info, key)
    }

    #[test]
    fn fourth_toast_waits_in_queue() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(info(&format!("toast-{i}")));
        }
        assert_eq!(manager.queued_count(), 0);

        manager.push(info("late"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
        assert!(manager.visible().all(|(_, n)| n.message_key() != "late"));
    }

    #[test]
    fn dismissing_reveals_the_next_toast() {
        let mut manager = Manager::new();
        let first = manager.push(info("toast-0"));
        for i in 1..=MAX_VISIBLE {
            manager.push(info(&format!("toast-{i}")));
        }

        assert!(manager.dismiss(first));
        assert!(!manager.dismiss(first));
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|(_, n)| n.message_key() == "toast-3"));
    }

    #[test]
    fn info_expires_after_three_seconds() {
        let mut manager = Manager::new();
        manager.push(info("saved"));
        let start = Instant::now();

        manager.tick_at(start + Duration::from_secs(1));
        assert!(manager.has_notifications());

        manager.tick_at(start + Duration::from_secs(4));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn errors_stay_until_dismissed() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::error("notification-backend-error"));

        manager.tick_at(Instant::now() + Duration::from_secs(3600));
        assert_eq!(manager.visible_count(), 1);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn queued_toast_clock_starts_when_shown() {
        let mut manager = Manager::new();
        let blockers: Vec<_> = (0..MAX_VISIBLE)
            .map(|_| manager.push(Notification::error("notification-backend-error")))
            .collect();
        manager.push(info("waiting"));

        let later = Instant::now() + Duration::from_secs(10);
        manager.tick_at(later);
        assert_eq!(manager.queued_count(), 1);

        manager.dismiss(blockers[0]);
        manager.tick_at(Instant::now() + Duration::from_secs(1));
        assert!(manager.visible().any(|(_, n)| n.message_key() == "waiting"));
    }

    #[test]
    fn clear_load_errors_keeps_other_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-load-error-io"));
        manager.push(Notification::error("notification-load-error-decode"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-backend-error"));

        manager.clear_load_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager
            .visible()
            .all(|(_, n)| !n.message_key().starts_with(LOAD_ERROR_PREFIX)));
    }
}
