// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of toasts.

use super::toast::{Severity, Toast, ToastId};
use crate::config::defaults::MAX_VISIBLE_TOASTS;
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(ToastId),
    /// Checks auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Toast>,
    /// Toasts waiting for a free slot.
    queue: VecDeque<Toast>,
    /// Warnings and errors are mirrored here when set.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows `toast` now, or queues it if `MAX_VISIBLE_TOASTS` are showing.
    pub fn push(&mut self, toast: Toast) {
        if let Some(handle) = &self.diagnostics {
            match toast.severity() {
                Severity::Warning => handle.log_warning(describe(&toast)),
                Severity::Error => handle.log_error(describe(&toast)),
                Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push_front(toast);
        } else {
            self.queue.push_back(toast);
        }
    }

    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible toast that expired by `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|t| t.is_expired(now))
            .map(Toast::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(Instant::now()),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes feed toasts once a load succeeds, so stale errors disappear.
    pub fn clear_feed_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible.retain(|t| !is_feed_error(t));
        self.queue.retain(|t| !is_feed_error(t));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            match self.queue.pop_front() {
                Some(toast) => self.visible.push_back(toast),
                None => break,
            }
        }
    }
}

/// Message key followed by its arguments, e.g. `key (details=...)`.
fn describe(toast: &Toast) -> String {
    let args = toast.message_args();
    if args.is_empty() {
        return toast.message_key().to_string();
    }

    let args: Vec<String> = args.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{} ({})", toast.message_key(), args.join(", "))
}

fn is_feed_error(toast: &Toast) -> bool {
    let key = toast.message_key();
    key.starts_with("notification-feed-") || key == "notification-io-error"
}
