// SPDX-License-Identifier: MPL-2.0
//! Operational diagnostics for postmortem analysis.
//!
//! Events are sent from anywhere in the application through a cheap,
//! cloneable [`DiagnosticsHandle`], drained by the [`DiagnosticsCollector`]
//! on the UI thread, and kept in a memory-bounded [`CircularBuffer`]. The
//! buffer can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Non-blocking sender; also the [`ErrorSink`] used by
//!   containment boundaries
//!
//! Sending never blocks and never fails: when the channel is full or the
//! collector is gone, the event is dropped.
//!
//! [`ErrorSink`]: crate::ui::boundary::ErrorSink

mod buffer;
mod collector;
mod events;
mod sanitizer;

pub use crate::domain::diagnostics::BufferCapacity;
pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, REPORT_FILE_NAME};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use sanitizer::sanitize_message;
