// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value storage for the tracker.
//!
//! The [`Store`] contract is deliberately small (get/set/remove of string
//! values). [`LocalStore`] layers the typed keys on top: the user record, the
//! user id, and the session credential. The pending-operation queue lives
//! under its own key and is handled by [`crate::sync::PendingQueue`].

mod file;
mod local;
mod memory;

pub use file::FileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

/// Key holding the user record as a JSON object.
pub const USER_DATA_KEY: &str = "negotiation_training_user_data";
/// Key holding the pending-operation queue as a JSON array.
pub const SYNC_QUEUE_KEY: &str = "negotiation_training_sync_queue";
/// Key holding the backend user id.
pub const USER_ID_KEY: &str = "negotiation_training_user_id";
/// Key holding the opaque session credential.
pub const AUTH_TOKEN_KEY: &str = "negotiation_training_auth_token";

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    #[error("corrupted value under '{key}': {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Transformation applied by [`Store::update`]: current value in, new value
/// out. Returning `None` removes the key.
pub type UpdateFn<'a> = dyn FnMut(Option<String>) -> StoreResult<Option<String>> + 'a;

/// String-valued key-value persistence.
///
/// Writes to a single key are atomic. There is no atomicity across keys.
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Read-modify-write of one key, excluding every other access to the
    /// store (across processes for on-disk stores) for the whole cycle. An
    /// error from `f` leaves the value unchanged.
    fn update(&self, key: &str, f: &mut UpdateFn<'_>) -> StoreResult<()>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
