// SPDX-License-Identifier: MPL-2.0
//! Toast data.

use crate::config::defaults::{TOAST_INFO_DURATION_MS, TOAST_WARNING_DURATION_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue, short duration).
    #[default]
    Info,
    /// Something fell back to a default (amber, longer duration).
    Warning,
    /// Operation failed (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_millis(TOAST_INFO_DURATION_MS)),
            Severity::Warning => Some(Duration::from_millis(TOAST_WARNING_DURATION_MS)),
            Severity::Error => None,
        }
    }
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    /// Resolved at render time so a locale switch applies to visible toasts.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Toast {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has outlived its severity's duration at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(Toast::info("a").id(), Toast::info("a").id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
        assert_ne!(Severity::Info.color(), Severity::Error.color());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_outlasts_info() {
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Info.auto_dismiss_duration());
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let toast = Toast::warning("notification-config-load-error");
        let created = toast.created_at;

        assert!(!toast.is_expired(created));
        assert!(toast.is_expired(created + Duration::from_millis(TOAST_WARNING_DURATION_MS)));
    }

    #[test]
    fn errors_never_expire() {
        let toast = Toast::error("notification-feed-malformed");
        assert!(!toast.is_expired(toast.created_at + Duration::from_secs(3600)));
    }

    #[test]
    fn builder_collects_arguments() {
        let toast = Toast::error("notification-feed-duplicate-id").with_arg("id", "4");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-feed-duplicate-id");
        assert_eq!(toast.message_args(), &[("id".to_string(), "4".to_string())]);
    }
}
