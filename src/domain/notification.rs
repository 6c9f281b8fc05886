// SPDX-License-Identifier: MPL-2.0
//! Admin notification record.
//!
//! Notifications are created and destroyed by the external notification
//! service. The console only reads them and refers to them by id when it
//! asks the service to mutate one.
//!
//! The wire shape uses camelCase field names (`createdAt`, `isRead`) and a
//! free-form `type` tag. The tag is narrowed to [`NotificationKind`] during
//! deserialization: anything that is not `alert`, `success` or `delivery`
//! becomes [`NotificationKind::General`] instead of failing. That includes
//! a missing tag, `null` and non-string values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Stable identifier of a notification, used as the mutation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of notification kinds. Governs icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something needs attention (low stock, failed payment).
    Alert,
    /// An operation completed.
    Success,
    /// A delivery is scheduled or in transit.
    Delivery,
    /// Anything else, including tags this build does not know.
    #[default]
    #[serde(other)]
    General,
}

impl NotificationKind {
    /// Narrows a raw tag to a kind. Unknown tags map to `General`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "alert" => NotificationKind::Alert,
            "success" => NotificationKind::Success,
            "delivery" => NotificationKind::Delivery,
            _ => NotificationKind::General,
        }
    }
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<NotificationKind, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<Value>::deserialize(deserializer)?;
    Ok(tag
        .as_ref()
        .and_then(Value::as_str)
        .map(NotificationKind::from_tag)
        .unwrap_or_default())
}

/// A notification as supplied by the notification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    /// Creates an unread notification.
    pub fn new(
        id: impl Into<NotificationId>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at,
            is_read: false,
        }
    }

    /// Returns a copy flagged as read.
    #[must_use]
    pub fn read(mut self) -> Self {
        self.is_read = true;
        self
    }

    #[must_use]
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
