// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core types with no dependency on the UI toolkit.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notification`]: Admin notification record ([`Notification`](notification::Notification),
//!   [`NotificationKind`](notification::NotificationKind), [`NotificationId`](notification::NotificationId))

pub mod diagnostics;
pub mod notification;
