// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connectivity state published to interested parties.
//!
//! Detection lives outside this module: whoever knows about the network
//! (the CLI's `--offline` flag, a test) calls [`Connectivity::set`].
//! Subscribers observe transitions through a `tokio::sync::watch` channel.
//! Each transition is also counted, so an observer can report how far it
//! has caught up.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

/// Network state as seen by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn from_online(online: bool) -> Self {
        if online {
            NetworkStatus::Online
        } else {
            NetworkStatus::Offline
        }
    }

    pub fn is_online(self) -> bool {
        self == NetworkStatus::Online
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkStatus::Online => write!(f, "online"),
            NetworkStatus::Offline => write!(f, "offline"),
        }
    }
}

/// Publisher of the current [`NetworkStatus`].
#[derive(Debug, Clone)]
pub struct Connectivity {
    tx: Arc<watch::Sender<NetworkStatus>>,
    transitions: Arc<AtomicU64>,
}

impl Connectivity {
    pub fn new(initial: NetworkStatus) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Connectivity {
            tx: Arc::new(tx),
            transitions: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn status(&self) -> NetworkStatus {
        *self.tx.borrow()
    }

    pub fn is_online(&self) -> bool {
        self.status().is_online()
    }

    /// Publish `status`. Returns the new status when it differs from the
    /// previous one, `None` when nothing changed.
    pub fn set(&self, status: NetworkStatus) -> Option<NetworkStatus> {
        let changed = self.tx.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                self.transitions.fetch_add(1, Ordering::SeqCst);
                true
            }
        });
        changed.then_some(status)
    }

    /// Number of transitions published so far.
    pub fn transitions(&self) -> u64 {
        self.transitions.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<NetworkStatus> {
        self.tx.subscribe()
    }

    /// Observer of transitions after this call. It does not keep the
    /// publisher alive: once every [`Connectivity`] clone is dropped,
    /// [`NetworkObserver::changed`] returns `None`.
    pub fn observe(&self) -> NetworkObserver {
        NetworkObserver {
            rx: self.tx.subscribe(),
            transitions: Arc::clone(&self.transitions),
        }
    }
}

/// Receiving side of [`Connectivity`] with transition counts.
#[derive(Debug)]
pub struct NetworkObserver {
    rx: watch::Receiver<NetworkStatus>,
    transitions: Arc<AtomicU64>,
}

impl NetworkObserver {
    /// Wait for the next change and return the current status together with
    /// the number of transitions it accounts for. Several quick transitions
    /// may be seen as one.
    pub async fn changed(&mut self) -> Option<(NetworkStatus, u64)> {
        self.rx.changed().await.ok()?;
        // The count is bumped under the channel's write lock, so reading it
        // while the value is borrowed keeps the pair consistent.
        let current = self.rx.borrow_and_update();
        let seen = self.transitions.load(Ordering::SeqCst);
        Some((*current, seen))
    }
}

/// Sink for user-visible notices (going offline, refused operations).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that reports through the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod tests;
