// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for parley-core operations.

use thiserror::Error;

/// All possible errors that can occur in parley-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no local progress record\n  hint: run 'parley init' first")]
    MissingRecord,

    #[error("unknown exercise: '{0}'\n  hint: valid exercises are: batna, meso, concessoes, spin, ancora, email, gravacao, taticas, framing, pos")]
    UnknownExercise(String),

    #[error("unknown training day: {0}\n  hint: training days run from 1 to 14")]
    UnknownDay(u32),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: not-started, in-progress, completed")]
    InvalidStatus(String),

    #[error("time spent would exceed the supported maximum (adding {0} minutes)")]
    TimeOverflow(u64),

    #[error("invalid operation kind: '{0}'")]
    InvalidOperation(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for parley-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
