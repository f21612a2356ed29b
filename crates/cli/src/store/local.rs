// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed access to the tracker's stored keys.

use std::sync::Arc;

use parley_core::{UserId, UserRecord};

use super::{
    MemoryStore, Store, StoreError, StoreResult, AUTH_TOKEN_KEY, USER_DATA_KEY, USER_ID_KEY,
};
use crate::sync::PendingQueue;

/// Cheaply clonable handle over a [`Store`].
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct LocalStore {
    store: Arc<dyn Store>,
}

impl LocalStore {
    pub fn new(store: Arc<dyn Store>) -> Self {
        LocalStore { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The pending-operation queue kept in this store.
    pub fn queue(&self) -> PendingQueue {
        PendingQueue::new(Arc::clone(&self.store))
    }

    pub fn load_record(&self) -> StoreResult<Option<UserRecord>> {
        let Some(json) = self.store.get(USER_DATA_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Corrupted {
                key: USER_DATA_KEY.to_string(),
                source,
            })
    }

    pub fn save_record(&self, record: &UserRecord) -> StoreResult<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(USER_DATA_KEY, &json)
    }

    pub fn clear_record(&self) -> StoreResult<()> {
        self.store.remove(USER_DATA_KEY)
    }

    /// The backend user id, if one has been assigned.
    pub fn user_id(&self) -> StoreResult<Option<UserId>> {
        Ok(self
            .store
            .get(USER_ID_KEY)?
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(UserId::new))
    }

    pub fn set_user_id(&self, id: &UserId) -> StoreResult<()> {
        self.store.set(USER_ID_KEY, id.as_str())
    }

    pub fn clear_user_id(&self) -> StoreResult<()> {
        self.store.remove(USER_ID_KEY)
    }

    pub fn auth_token(&self) -> StoreResult<Option<String>> {
        Ok(self.store.get(AUTH_TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    pub fn set_auth_token(&self, token: &str) -> StoreResult<()> {
        self.store.set(AUTH_TOKEN_KEY, token)
    }

    pub fn clear_auth_token(&self) -> StoreResult<()> {
        self.store.remove(AUTH_TOKEN_KEY)
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}
