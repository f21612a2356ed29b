// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! parley-core: data model and pure logic for the negotiation course tracker.
//!
//! Everything here is free of I/O: the user record and its wire format, local
//! mutations, the pending-operation log entries, and the merge used to
//! reconcile local and backend copies. The `parley` crate layers storage,
//! HTTP, and the CLI on top.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod merge;
pub mod mutation;
pub mod op;
pub mod progress;
pub mod record;
pub mod timestamp;

pub use catalog::{day_exercise, exercise_name, Exercise, DAY_COUNT};
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use merge::{merge, merge_history, ACTIVITY_HISTORY_LIMIT};
pub use mutation::{DayPatch, ExercisePatch};
pub use op::{DayUpdate, ExerciseUpdate, Operation, PendingOperation};
pub use progress::ProgressSummary;
pub use record::{Activity, DayState, ExerciseState, Status, UserId, UserRecord};
pub use timestamp::Timestamp;
