// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks while the spinner is turning or toasts are waiting to expire.
pub fn create_tick_subscription(is_loading: bool, has_toasts: bool) -> Subscription<Message> {
    if is_loading || has_toasts {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
