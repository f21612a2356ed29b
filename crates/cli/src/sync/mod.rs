// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend synchronization.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Coordinator  │────►│   Remote    │────►│   Backend   │
//! │ (sync pass)  │◄────│   (trait)   │◄────│  HTTP API   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │   ▲
//!        ▼   │ watch
//! ┌──────────────┐     ┌──────────────┐
//! │ PendingQueue │     │ Connectivity │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! - Pending operations survive restarts and leave the queue only after the
//!   backend accepted them
//! - The remote is a trait so tests can script the backend
//! - Connectivity is published by the caller; the coordinator only reads it

mod connectivity;
mod coordinator;
mod http;
mod queue;
mod remote;

pub use connectivity::{Connectivity, LogNotifier, NetworkObserver, NetworkStatus, Notifier};
pub use coordinator::{PassOutcome, SyncCoordinator, SyncError, SyncResult};
pub use http::{HttpRemote, IDEMPOTENCY_KEY_HEADER};
pub use queue::{PendingQueue, QueueError, QueueResult};
pub use remote::{
    apply, NewUser, Remote, RemoteError, RemoteFuture, RemoteResult, SessionStatus, UserSummary,
};

#[cfg(test)]
pub(crate) mod test_helpers;
