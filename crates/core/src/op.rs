// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pending operations: local changes waiting to be replayed on the backend.
//!
//! JSON layout: `{"kind": "update_exercise", "payload": {...}, "enqueuedAt": ms}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::record::Status;

/// Body of a remote exercise update.
///
/// `time_spent` is the increment applied by this change, not the running
/// total; the backend accumulates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseUpdate {
    pub exercise_type: String,
    pub status: Status,
    #[serde(default)]
    pub time_spent: u64,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Body of a remote training-day update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayUpdate {
    pub day_number: u32,
    pub status: Status,
    #[serde(default)]
    pub time_spent: u64,
}

/// A change to replay on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Operation {
    UpdateExercise(ExerciseUpdate),
    UpdateTrainingDay(DayUpdate),
}

impl Operation {
    /// Returns the wire name of the operation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::UpdateExercise(_) => "update_exercise",
            Operation::UpdateTrainingDay(_) => "update_training_day",
        }
    }
}

/// An operation plus the time it was queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOperation {
    #[serde(flatten)]
    pub op: Operation,
    /// Epoch milliseconds when the operation was queued.
    pub enqueued_at: i64,
}

impl PendingOperation {
    pub fn new(op: Operation, enqueued_at: i64) -> Self {
        PendingOperation { op, enqueued_at }
    }

    pub fn kind(&self) -> &'static str {
        self.op.kind()
    }

    /// Content-derived key sent with every replay of this operation.
    ///
    /// Replays of the same queued entry always produce the same key, so a
    /// backend can recognise an update whose acknowledgement was lost.
    pub fn idempotency_key(&self) -> String {
        let body = serde_json::to_vec(&self.op).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(self.enqueued_at.to_be_bytes());
        hasher.update(&body);
        hex::encode(&hasher.finalize()[..16])
    }
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
