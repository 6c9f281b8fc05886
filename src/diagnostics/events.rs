// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions recorded for correlation with failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Asked the notification service to mark a notification read.
    MarkRead { id: u64 },

    /// Asked the notification service to delete a notification.
    Delete { id: u64 },

    /// Requested a fresh snapshot.
    Refresh,

    /// Triggered the full reload from a failed containment boundary.
    Reload,
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A containment boundary caught a render failure and switched to its
    /// fallback view.
    RenderFailure {
        /// Name of the boundary that caught the failure.
        boundary: String,
        /// Failure description (panic payload or render error).
        message: String,
        /// What the boundary was rendering when it failed.
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<String>,
    },

    UserAction {
        action: UserAction,
    },

    /// Non-critical issue (e.g., config fell back to defaults).
    Warning { message: String },

    /// Operation failure outside the render path (e.g., feed load failed).
    Error { message: String },
}
