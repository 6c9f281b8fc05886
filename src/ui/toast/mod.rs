// SPDX-License-Identifier: MPL-2.0
//! Toast feedback for the host application.
//!
//! Toasts report problems of the console itself (unreadable settings, a feed
//! that failed to load). They are unrelated to the admin notifications shown
//! in the inbox.
//!
//! # Components
//!
//! - [`toast`] - `Toast` data with severity and i18n message key
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`overlay`] - Rendering of the visible toasts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toast::{self, Manager, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Toast::warning("notification-config-load-error"));
//!
//! let overlay = toast::view_overlay(&manager, &i18n).map(Message::Toast);
//! ```
//!
//! Warnings dismiss themselves after a few seconds, errors stay until closed.
//! At most three toasts are visible; the rest are queued.

mod manager;
mod overlay;
mod toast;

pub use manager::{Manager, Message};
pub use overlay::view_overlay;
pub use toast::{Severity, Toast, ToastId};
