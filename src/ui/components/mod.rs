// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across views.
//!
//! - [`error_display`] - Consistent error presentation with a severity icon
//!   and a single recovery action

pub mod error_display;
