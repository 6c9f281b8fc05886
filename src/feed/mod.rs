// SPDX-License-Identifier: MPL-2.0
//! Boundary between the console and the external notification service.
//!
//! The inbox never talks to the service directly. The host application
//! fetches a [`Snapshot`] through [`NotificationSource`] and forwards the
//! inbox's intents to a [`MutationService`]. Both traits are object safe so
//! the host can hold an `Arc<dyn NotificationService>`.
//!
//! Payloads are validated here, before they reach the UI: a snapshot never
//! contains two notifications with the same id.

mod file;
mod memory;

pub use file::JsonFileSource;
pub use memory::MemoryStore;

use crate::domain::notification::{Notification, NotificationId};
use crate::error::{FeedError, Result};
use std::collections::HashSet;

/// A validated, caller-ordered list of notifications for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    notifications: Vec<Notification>,
}

impl Snapshot {
    /// Validates a list of notifications. Order is preserved.
    pub fn new(notifications: Vec<Notification>) -> std::result::Result<Self, FeedError> {
        let mut seen = HashSet::with_capacity(notifications.len());
        for notification in &notifications {
            if !seen.insert(notification.id) {
                return Err(FeedError::DuplicateId(notification.id.value()));
            }
        }
        Ok(Self { notifications })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of notifications in the service's wire format.
    pub fn from_json(json: &str) -> Result<Self> {
        let notifications: Vec<Notification> = serde_json::from_str(json)?;
        Ok(Self::new(notifications)?)
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.is_unread()).count()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.notifications.iter().any(|n| n.id == id)
    }

    #[must_use]
    pub fn into_notifications(self) -> Vec<Notification> {
        self.notifications
    }
}

/// Supplies notification snapshots. Fetching, caching and pagination are the
/// implementor's business.
pub trait NotificationSource: Send + Sync {
    fn fetch(&self) -> Result<Snapshot>;
}

/// Performs the mutations the inbox asks for.
///
/// Calls are fire-and-forget from the caller's point of view: there is no
/// return value, and retries, failure reporting and de-duplication belong to
/// the implementor. Implementations must tolerate repeated calls for the same
/// id.
pub trait MutationService: Send + Sync {
    fn mark_read(&self, id: NotificationId);
    fn delete(&self, id: NotificationId);
}

/// A collaborator that both supplies snapshots and performs mutations.
pub trait NotificationService: NotificationSource + MutationService {}

impl<T: NotificationSource + MutationService> NotificationService for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationKind;
    use chrono::Utc;

    fn sample(id: u64) -> Notification {
        Notification::new(id, NotificationKind::General, format!("n{id}"), "", Utc::now())
    }

    #[test]
    fn snapshot_rejects_duplicate_ids() {
        let err = Snapshot::new(vec![sample(1), sample(2), sample(1)]).unwrap_err();
        assert_eq!(err, FeedError::DuplicateId(1));
    }

    #[test]
    fn snapshot_preserves_caller_order() {
        let snapshot = Snapshot::new(vec![sample(3), sample(1), sample(2)]).expect("unique ids");
        let ids: Vec<u64> = snapshot
            .notifications()
            .iter()
            .map(|n| n.id.value())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unread_count_ignores_read_items() {
        let snapshot =
            Snapshot::new(vec![sample(1), sample(2).read(), sample(3)]).expect("unique ids");
        assert_eq!(snapshot.unread_count(), 2);
    }

    #[test]
    fn from_json_reports_malformed_payload() {
        let err = Snapshot::from_json("{\"not\":\"a list\"}").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Feed(FeedError::Malformed(_))
        ));
    }

    #[test]
    fn from_json_accepts_empty_array() {
        let snapshot = Snapshot::from_json("[]").expect("empty list is valid");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn from_json_tolerates_null_and_numeric_type_tags() {
        let json = r#"[
            {"id": 1, "type": null, "title": "No tag", "createdAt": "2024-03-01T08:00:00Z"},
            {"id": 2, "type": 3, "title": "Numeric tag", "createdAt": "2024-03-01T09:00:00Z"},
            {"id": 3, "type": "delivery", "title": "Courier", "createdAt": "2024-03-01T10:00:00Z"}
        ]"#;

        let snapshot = Snapshot::from_json(json).expect("odd tags must not reject the feed");
        let kinds: Vec<NotificationKind> =
            snapshot.notifications().iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NotificationKind::General,
                NotificationKind::General,
                NotificationKind::Delivery
            ]
        );
    }
}
