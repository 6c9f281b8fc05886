// SPDX-License-Identifier: MPL-2.0
//! In-process notification service.
//!
//! Seeds itself from an optional [`NotificationSource`] on first fetch and
//! applies mutations to its own copy afterwards. Nothing is written back to
//! the source.

use super::{MutationService, NotificationSource, Snapshot};
use crate::domain::notification::{Notification, NotificationId};
use crate::error::{FeedError, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct MemoryStore {
    seed: Option<Box<dyn NotificationSource>>,
    state: Mutex<Option<Vec<Notification>>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("seeded", &self.seed.is_some())
            .field("loaded", &self.lock().is_some())
            .finish()
    }
}

impl MemoryStore {
    /// Creates a store with no seed. Fetching reports `NotConfigured`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that loads its initial contents from `source`.
    pub fn seeded_from(source: impl NotificationSource + 'static) -> Self {
        Self {
            seed: Some(Box::new(source)),
            state: Mutex::new(None),
        }
    }

    /// Creates a store that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            seed: None,
            state: Mutex::new(Some(snapshot.into_notifications())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<Notification>>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSource for MemoryStore {
    fn fetch(&self) -> Result<Snapshot> {
        let mut state = self.lock();
        if let Some(notifications) = state.as_ref() {
            return Ok(Snapshot::new(notifications.clone())?);
        }

        let seed = self.seed.as_ref().ok_or(FeedError::NotConfigured)?;
        let snapshot = seed.fetch()?;
        *state = Some(snapshot.notifications().to_vec());
        Ok(snapshot)
    }
}

impl MutationService for MemoryStore {
    fn mark_read(&self, id: NotificationId) {
        if let Some(notifications) = self.lock().as_mut() {
            if let Some(n) = notifications.iter_mut().find(|n| n.id == id) {
                n.is_read = true;
            }
        }
    }

    fn delete(&self, id: NotificationId) {
        if let Some(notifications) = self.lock().as_mut() {
            notifications.retain(|n| n.id != id);
        }
    }
}
