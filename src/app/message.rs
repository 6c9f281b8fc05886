// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::feed::Snapshot;
use crate::ui::{header, inbox, toast};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Inbox(inbox::Message),
    Toast(toast::Message),
    /// Result of a snapshot fetch started by boot, refresh or an intent,
    /// tagged with the generation of the fetch that produced it.
    FeedLoaded(u64, Result<Snapshot, Error>),
    /// Recovery action of the containment boundary's fallback.
    Reload,
    /// Periodic tick for the spinner and toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
///
/// Kept by the application so a reload boots with the same inputs.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Notification feed file (`--feed`), takes precedence over the config.
    pub feed_path: Option<PathBuf>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
