// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::store::StoreError;
use crate::sync::{QueueError, RemoteError, SyncError};

/// All possible errors that can occur in the parley library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] parley_core::Error),

    #[error("{operation} needs a connection\n  hint: drop --offline or unset PARLEY_OFFLINE")]
    Offline { operation: &'static str },

    #[error("not signed in\n  hint: run 'parley login <email> <password>' or 'parley register <name> <email> <password>'")]
    NotSignedIn,

    #[error("sync did not complete; pending changes are kept for the next attempt")]
    SyncIncomplete,

    #[error("report unavailable")]
    ReportUnavailable,

    #[error("no async runtime available to run background sync")]
    NoRuntime,

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for parley operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
