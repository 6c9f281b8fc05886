// SPDX-License-Identifier: MPL-2.0
//! `mealbox_console` is the admin notification inbox of a meal-subscription
//! back office, built with the Iced GUI framework.
//!
//! The inbox renders snapshots supplied by a notification service, forwards
//! mark-read and delete intents back to it, and runs inside a containment
//! boundary that swaps in a reload fallback when rendering fails.

#![doc(html_root_url = "https://docs.rs/mealbox_console/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod ui;
