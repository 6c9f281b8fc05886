// SPDX-License-Identifier: MPL-2.0
//! Notification source backed by a JSON export on disk.

use super::{NotificationSource, Snapshot};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a JSON array of notifications from a file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotificationSource for JsonFileSource {
    fn fetch(&self) -> Result<Snapshot> {
        let content = fs::read_to_string(&self.path)?;
        Snapshot::from_json(&content)
    }
}
