// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    sanitize_message, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    UserAction,
};
use crate::error::Result;
use crate::ui::boundary::{DiagnosticInfo, ErrorSink, RenderFailure};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the report written next to `settings.toml`.
pub const REPORT_FILE_NAME: &str = "diagnostics.json";

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Every method is
/// non-blocking and drops the event if the channel is full or the collector
/// has been dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a warning. The message is sanitized to remove file paths.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: sanitize_message(&message.into()),
        });
    }

    /// Logs an error. The message is sanitized to remove file paths.
    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: sanitize_message(&message.into()),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

impl ErrorSink for DiagnosticsHandle {
    fn record(&self, failure: &RenderFailure, info: &DiagnosticInfo) {
        self.send(DiagnosticEventKind::RenderFailure {
            boundary: info.boundary.clone(),
            message: sanitize_message(failure.message()),
            context: info.context.as_deref().map(sanitize_message),
        });
    }
}

/// Channel depth between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Central collector for diagnostic events.
///
/// Receives events through a bounded channel and stores them in a circular
/// buffer; old events are evicted when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Kept so that handles can be created at any time.
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

/// JSON export shape.
#[derive(Serialize)]
struct Report<'a> {
    collection_started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<&'a DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Called from the UI tick and before exporting.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the buffered events as a pretty-printed JSON report.
    ///
    /// Call [`process_pending`](Self::process_pending) first to include
    /// events still in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = Report {
            collection_started_at: self.started_at,
            exported_at: Utc::now(),
            event_count: self.buffer.len(),
            events: self.buffer.iter().collect(),
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(path, &json)?;

        Ok(path.to_path_buf())
    }

    /// Number of stored render failures.
    #[must_use]
    pub fn render_failure_count(&self) -> usize {
        self.buffer
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::RenderFailure { .. }))
            .count()
    }
}

/// Writes through a temp file and renames it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}
