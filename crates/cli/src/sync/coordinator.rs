// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync pass: flush pending operations, pull the backend record, merge.
//!
//! A pass runs only while online and goes through these steps:
//! 1. Without a user id, create the backend user from the local profile
//!    (skipped entirely when there is nothing queued)
//! 2. Snapshot the queue and replay it in order; on full success remove
//!    exactly the snapshot, so operations queued meanwhile survive
//! 3. Fetch the backend record, merge it with the local one, store the result
//!
//! Any failure ends the pass and leaves the queue as it was. Passes never
//! overlap: a pass requested while another runs waits for it.

use std::sync::Arc;

use parley_core::{merge, ClockSource, UserId};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use super::connectivity::NetworkStatus;
use super::queue::QueueError;
use super::remote::{self, NewUser, Remote, RemoteError};
use crate::store::{LocalStore, StoreError};

/// Error type for a sync pass.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    /// No backend user yet and the local record lacks a name or email.
    #[error("cannot create backend user: profile name and email are required")]
    MissingProfile,
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// How a pass that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Offline; nothing attempted.
    Offline,
    /// No user id and nothing queued.
    Idle,
    /// Queue flushed and record merged.
    Synced { flushed: usize },
}

/// Runs sync passes against one store and one backend.
pub struct SyncCoordinator {
    local: LocalStore,
    remote: Arc<dyn Remote>,
    clock: Arc<dyn ClockSource>,
    network: watch::Receiver<NetworkStatus>,
    pass: Mutex<()>,
}

impl SyncCoordinator {
    pub fn new(
        local: LocalStore,
        remote: Arc<dyn Remote>,
        clock: Arc<dyn ClockSource>,
        network: watch::Receiver<NetworkStatus>,
    ) -> Self {
        SyncCoordinator {
            local,
            remote,
            clock,
            network,
            pass: Mutex::new(()),
        }
    }

    pub fn is_online(&self) -> bool {
        self.network.borrow().is_online()
    }

    /// Run a pass, logging any failure. Returns whether the pass completed
    /// while online.
    pub async fn run_pass(&self) -> bool {
        match self.try_pass().await {
            Ok(PassOutcome::Synced { flushed }) => {
                info!(flushed, "sync pass complete");
                true
            }
            Ok(PassOutcome::Idle) => {
                debug!("sync pass: nothing to do");
                true
            }
            Ok(PassOutcome::Offline) => {
                debug!("sync pass skipped: offline");
                false
            }
            Err(SyncError::Remote(e)) if e.is_network() => {
                info!("sync pass interrupted, changes stay queued: {e}");
                false
            }
            Err(e) => {
                warn!("sync pass failed: {e}");
                false
            }
        }
    }

    /// Run a pass and report how it ended.
    pub async fn try_pass(&self) -> SyncResult<PassOutcome> {
        let _pass = self.pass.lock().await;

        if !self.is_online() {
            return Ok(PassOutcome::Offline);
        }

        let queue = self.local.queue();
        let user_id = match self.local.user_id()? {
            Some(id) => id,
            None if queue.is_empty()? => return Ok(PassOutcome::Idle),
            None => self.create_remote_user().await?,
        };

        let snapshot = queue.peek_all()?;
        for op in &snapshot {
            debug!(kind = op.kind(), enqueued_at = op.enqueued_at, "replaying operation");
            remote::apply(self.remote.as_ref(), &user_id, op).await?;
        }
        if !snapshot.is_empty() {
            queue.remove_first(snapshot.len())?;
            info!(count = snapshot.len(), "flushed pending operations");
        }

        debug!(user = %user_id, "fetching backend record");
        let backend = self.remote.fetch_user(user_id).await?;
        let local = self.local.load_record()?;
        if let Some(merged) = merge(local.as_ref(), Some(&backend), self.clock.now_ms()) {
            self.local.save_record(&merged)?;
        }

        Ok(PassOutcome::Synced {
            flushed: snapshot.len(),
        })
    }

    /// Return the stored user id, creating the backend user first when
    /// there is none.
    pub async fn ensure_remote_user(&self) -> SyncResult<UserId> {
        let _pass = self.pass.lock().await;
        match self.local.user_id()? {
            Some(id) => Ok(id),
            None => self.create_remote_user().await,
        }
    }

    async fn create_remote_user(&self) -> SyncResult<UserId> {
        let record = self.local.load_record()?.unwrap_or_default();
        if record.name.is_empty() || record.email.is_empty() {
            return Err(SyncError::MissingProfile);
        }

        let user = NewUser {
            name: record.name,
            email: record.email,
            password: None,
        };
        let created = self.remote.create_user(user).await?;
        self.local.set_user_id(&created.id)?;
        info!(user = %created.id, "created backend user");
        Ok(created.id)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
