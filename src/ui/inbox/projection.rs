// SPDX-License-Identifier: MPL-2.0
//! Pure projection from a notification snapshot to what the inbox shows.
//!
//! Everything the view decides (which state to show, which icon, emphasis,
//! which actions) is computed here so it can be tested without a renderer.

use crate::domain::notification::{Notification, NotificationId, NotificationKind};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Timestamp pattern used when the config does not override it.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Icon variant for a notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindIcon {
    Danger,
    Confirmation,
    Pending,
    General,
}

impl From<NotificationKind> for KindIcon {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Alert => KindIcon::Danger,
            NotificationKind::Success => KindIcon::Confirmation,
            NotificationKind::Delivery => KindIcon::Pending,
            NotificationKind::General => KindIcon::General,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemModel {
    pub id: NotificationId,
    pub icon: KindIcon,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    /// Title rendered emphasized and row tinted.
    pub emphasized: bool,
    pub unread_dot: bool,
    pub can_mark_read: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxModel {
    Loading,
    Empty,
    List(Vec<ItemModel>),
}

impl InboxModel {
    pub fn items(&self) -> &[ItemModel] {
        match self {
            InboxModel::List(items) => items,
            InboxModel::Loading | InboxModel::Empty => &[],
        }
    }
}

/// Time zone used for timestamp labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The machine's local time zone.
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// Formats notification timestamps for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormatter {
    pattern: String,
    zone: Zone,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl TimestampFormatter {
    /// Formatter in local time with a `strftime`-style pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            zone: Zone::Local,
        }
    }

    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, timestamp: &DateTime<Utc>) -> String {
        match self.zone {
            Zone::Local => timestamp
                .with_timezone(&Local)
                .format(&self.pattern)
                .to_string(),
            Zone::Fixed(offset) => timestamp
                .with_timezone(&offset)
                .format(&self.pattern)
                .to_string(),
        }
    }
}

/// Checks that `pattern` is a usable `strftime` pattern.
pub fn is_valid_pattern(pattern: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Builds the inbox model.
///
/// `loading` wins over both the list and the empty state. Items keep the
/// snapshot order.
pub fn project(
    notifications: &[Notification],
    loading: bool,
    formatter: &TimestampFormatter,
) -> InboxModel {
    if loading {
        return InboxModel::Loading;
    }
    if notifications.is_empty() {
        return InboxModel::Empty;
    }

    InboxModel::List(
        notifications
            .iter()
            .map(|notification| project_item(notification, formatter))
            .collect(),
    )
}

fn project_item(notification: &Notification, formatter: &TimestampFormatter) -> ItemModel {
    let unread = notification.is_unread();
    ItemModel {
        id: notification.id,
        icon: notification.kind.into(),
        title: notification.title.clone(),
        message: notification.message.clone(),
        timestamp: formatter.format(&notification.created_at),
        emphasized: unread,
        unread_dot: unread,
        can_mark_read: unread,
        can_delete: true,
    }
}
