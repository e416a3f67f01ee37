//! In-process notification queue — transient, auto-expiring operator feedback.
//!
//! Entries expire independently exactly [`NOTIFICATION_LIFETIME_MS`] after
//! they are pushed; removing one never affects another's remaining lifetime.
//! There is no capacity limit and no deduplication. Rendering is a pure
//! projection over the active entries, so expiry can be tested with explicit
//! timestamps instead of wall-clock waits; the browser adapter additionally
//! schedules a per-entry timer that calls [`NotificationQueue::dismiss`].

use chrono::Duration;

use hydroview_domain::notification::{NOTIFICATION_LIFETIME_MS, Notification};
use hydroview_domain::time::Timestamp;

/// A queued notification with its identity and expiry instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    /// Unique id for keyed rendering and scoped dismissal.
    pub id: u32,
    pub notification: Notification,
    expires_at: Timestamp,
}

impl ActiveNotification {
    /// Whether this entry is still visible at `now`.
    #[must_use]
    pub fn is_active(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}

/// Ordered queue of active notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: Vec<ActiveNotification>,
    next_id: u32,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification at `now`, returning its id. The entry expires
    /// [`NOTIFICATION_LIFETIME_MS`] later.
    pub fn push(&mut self, notification: Notification, now: Timestamp) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ActiveNotification {
            id,
            notification,
            expires_at: now + Duration::milliseconds(i64::from(NOTIFICATION_LIFETIME_MS)),
        });
        id
    }

    /// Remove one entry by id. Missing ids are ignored.
    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Drop every entry that is no longer active at `now`.
    pub fn sweep(&mut self, now: Timestamp) {
        self.entries.retain(|entry| entry.is_active(now));
    }

    /// Pure projection of the entries visible at `now`, in push order.
    pub fn active(&self, now: Timestamp) -> impl Iterator<Item = &ActiveNotification> {
        self.entries.iter().filter(move |entry| entry.is_active(now))
    }

    /// All queued entries, in push order, regardless of expiry.
    pub fn entries(&self) -> impl Iterator<Item = &ActiveNotification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn at(ms: i64) -> Timestamp {
        t0() + Duration::milliseconds(ms)
    }

    #[test]
    fn should_expire_after_lifetime_elapses() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("hello"), t0());

        assert_eq!(queue.active(at(2999)).count(), 1);
        assert_eq!(queue.active(at(3001)).count(), 0);
    }

    #[test]
    fn should_expire_entries_independently() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("first"), t0());
        queue.push(Notification::error("second"), at(2000));

        let visible: Vec<_> = queue
            .active(at(3500))
            .map(|e| e.notification.message.clone())
            .collect();
        assert_eq!(visible, vec!["second".to_string()]);
    }

    #[test]
    fn should_not_deduplicate_identical_messages() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("same"), t0());
        queue.push(Notification::info("same"), t0());
        assert_eq!(queue.active(t0()).count(), 2);
    }

    #[test]
    fn should_dismiss_only_the_given_id() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::info("first"), t0());
        queue.push(Notification::info("second"), t0());

        queue.dismiss(first);

        let remaining: Vec<_> = queue
            .entries()
            .map(|e| e.notification.message.clone())
            .collect();
        assert_eq!(remaining, vec!["second".to_string()]);

        // Dismissing one entry must not shorten the other's lifetime.
        assert_eq!(queue.active(at(2999)).count(), 1);
    }

    #[test]
    fn should_assign_increasing_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::info("a"), t0());
        let b = queue.push(Notification::info("b"), t0());
        assert!(b > a);
    }

    #[test]
    fn should_sweep_expired_entries() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("old"), t0());
        queue.push(Notification::info("fresh"), at(2000));

        queue.sweep(at(3500));

        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.entries().next().unwrap().notification.message,
            "fresh"
        );
    }
}
