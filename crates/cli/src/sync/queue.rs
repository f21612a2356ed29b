// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending-operation queue for changes not yet applied on the backend.
//!
//! The queue is a JSON array stored under a single store key, oldest first.
//! Operations leave the queue only through [`PendingQueue::remove_first`],
//! which the sync pass calls after the whole drained prefix was accepted.

use std::sync::Arc;

use parley_core::PendingOperation;

use crate::store::{Store, StoreError, SYNC_QUEUE_KEY};

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Underlying store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Ordered, durable queue of [`PendingOperation`]s.
///
/// Every change is a single [`Store::update`] cycle, so handles in other
/// threads or other processes sharing the store never lose each other's
/// operations.
pub struct PendingQueue {
    store: Arc<dyn Store>,
}

impl PendingQueue {
    pub(crate) fn new(store: Arc<dyn Store>) -> Self {
        PendingQueue { store }
    }

    fn read(&self) -> QueueResult<Vec<PendingOperation>> {
        Ok(parse(self.store.get(SYNC_QUEUE_KEY)?)?)
    }

    /// Apply `change` to the stored operations in one locked cycle.
    fn modify<F>(&self, mut change: F) -> QueueResult<()>
    where
        F: FnMut(&mut Vec<PendingOperation>),
    {
        self.store.update(SYNC_QUEUE_KEY, &mut |current| {
            let mut ops = parse(current).map_err(|source| StoreError::Corrupted {
                key: SYNC_QUEUE_KEY.to_string(),
                source,
            })?;
            change(&mut ops);
            if ops.is_empty() {
                Ok(None)
            } else {
                Ok(Some(serde_json::to_string(&ops)?))
            }
        })?;
        Ok(())
    }

    /// Append an operation. It is durable once this returns.
    pub fn enqueue(&self, op: &PendingOperation) -> QueueResult<()> {
        self.modify(|ops| ops.push(op.clone()))
    }

    /// Read all queued operations without removing them.
    pub fn peek_all(&self) -> QueueResult<Vec<PendingOperation>> {
        self.read()
    }

    pub fn len(&self) -> QueueResult<usize> {
        Ok(self.peek_all()?.len())
    }

    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> QueueResult<()> {
        self.modify(Vec::clear)
    }

    /// Remove the first `count` operations, keeping anything enqueued after
    /// them.
    pub fn remove_first(&self, count: usize) -> QueueResult<()> {
        self.modify(|ops| {
            ops.drain(..count.min(ops.len()));
        })
    }
}

fn parse(value: Option<String>) -> Result<Vec<PendingOperation>, serde_json::Error> {
    match value {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(&json),
        _ => Ok(Vec::new()),
    }
}

impl std::fmt::Debug for PendingQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingQueue").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
