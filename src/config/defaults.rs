// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Inbox**: Timestamp formatting
//! - **Diagnostics**: Event buffer sizing
//! - **Toasts**: Host feedback auto-dismiss timing
//! - **Animation**: Tick interval for the loading spinner and toasts

pub use crate::ui::inbox::projection::DEFAULT_TIMESTAMP_FORMAT;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// How long success and info toasts stay visible (in milliseconds).
pub const TOAST_INFO_DURATION_MS: u64 = 3_000;

/// How long warning toasts stay visible (in milliseconds).
pub const TOAST_WARNING_DURATION_MS: u64 = 5_000;

/// Maximum number of toasts shown at once; the rest wait in a queue.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval of the UI tick while something animates (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(TOAST_INFO_DURATION_MS < TOAST_WARNING_DURATION_MS);
    assert!(MAX_VISIBLE_TOASTS > 0);

    // The tick must be fine enough to dismiss toasts on time
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < TOAST_INFO_DURATION_MS);
};
