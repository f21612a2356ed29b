// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote abstraction for the tracker backend.
//!
//! Provides a trait-based seam so that:
//! - [`HttpRemote`](super::HttpRemote) talks to the real JSON-over-HTTP API
//! - tests drive the sync pass with an in-process mock

use std::future::Future;
use std::pin::Pin;

use parley_core::{DayUpdate, ExerciseUpdate, Operation, PendingOperation, UserId, UserRecord};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error type for remote operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The backend answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    /// The request never completed. Treated like being offline.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered but the body was not what we expected.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Reading or saving the session credential failed.
    #[error("credential store error: {0}")]
    Credentials(#[from] StoreError),
}

impl RemoteError {
    pub fn is_network(&self) -> bool {
        matches!(self, RemoteError::Network(_))
    }
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Boxed future returned by [`Remote`] methods.
pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = RemoteResult<T>> + Send + 'a>>;

/// Body of a user creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// User identity returned by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Answer to a session check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default, alias = "userId")]
    pub user_id: Option<UserId>,
}

/// Request/response operations offered by the backend.
///
/// Implementations forward the session credential on every call; callers
/// never see it.
pub trait Remote: Send + Sync {
    fn create_user(&self, user: NewUser) -> RemoteFuture<'_, UserSummary>;

    fn login(&self, email: String, password: String) -> RemoteFuture<'_, UserSummary>;

    fn logout(&self) -> RemoteFuture<'_, ()>;

    fn check_session(&self) -> RemoteFuture<'_, SessionStatus>;

    fn fetch_user(&self, id: UserId) -> RemoteFuture<'_, UserRecord>;

    /// Apply an exercise update. `idempotency_key` is stable across replays
    /// of the same queued operation.
    fn put_exercise(
        &self,
        user_id: UserId,
        update: ExerciseUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()>;

    fn put_training_day(
        &self,
        user_id: UserId,
        update: DayUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()>;

    /// Fetch the rendered progress report (a PDF).
    fn fetch_report(&self, user_id: UserId) -> RemoteFuture<'_, Vec<u8>>;
}

/// Replay one queued operation against `remote`.
pub async fn apply(remote: &dyn Remote, user_id: &UserId, op: &PendingOperation) -> RemoteResult<()> {
    let key = op.idempotency_key();
    match &op.op {
        Operation::UpdateExercise(update) => {
            remote.put_exercise(user_id.clone(), update.clone(), key).await
        }
        Operation::UpdateTrainingDay(update) => {
            remote.put_training_day(user_id.clone(), update.clone(), key).await
        }
    }
}
