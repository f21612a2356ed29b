// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local mutation rules for exercises and training days.
//!
//! A patch is shallow-merged onto the stored entry:
//! - `status` and `data` replace the stored values when present
//! - `time_spent` is an increment added to the entry and to the record total;
//!   an increment that would overflow either is rejected
//! - `lastActivity` is always stamped with the mutation time
//! - moving into `completed` from any other status prepends an activity
//!
//! Each apply returns the operation to queue for the backend. Nothing is
//! changed when the entry does not exist.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::op::{DayUpdate, ExerciseUpdate, Operation};
use crate::record::{Activity, Status, UserRecord};
use crate::timestamp::Timestamp;

/// Partial update for an exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExercisePatch {
    pub status: Option<Status>,
    pub time_spent: Option<u64>,
    pub data: Option<Map<String, Value>>,
}

impl ExercisePatch {
    pub fn status(status: Status) -> Self {
        ExercisePatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_time_spent(mut self, minutes: u64) -> Self {
        self.time_spent = Some(minutes);
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Partial update for a training day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPatch {
    pub status: Option<Status>,
    pub time_spent: Option<u64>,
}

impl DayPatch {
    pub fn status(status: Status) -> Self {
        DayPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_time_spent(mut self, minutes: u64) -> Self {
        self.time_spent = Some(minutes);
        self
    }
}

impl UserRecord {
    /// Applies an exercise patch stamped at `now`.
    pub fn apply_exercise_patch(
        &mut self,
        exercise_id: &str,
        patch: &ExercisePatch,
        now: &Timestamp,
    ) -> Result<Operation> {
        let increment = patch.time_spent.unwrap_or(0);
        let total = add_minutes(self.total_time_spent, increment)?;
        let entry = self
            .exercises
            .get_mut(exercise_id)
            .ok_or_else(|| Error::UnknownExercise(exercise_id.to_string()))?;
        let entry_time = add_minutes(entry.time_spent, increment)?;

        let was_completed = entry.status.is_completed();
        if let Some(status) = patch.status {
            entry.status = status;
        }
        if let Some(data) = &patch.data {
            entry.data = data.clone();
        }
        entry.time_spent = entry_time;
        entry.last_activity = Some(now.clone());

        let update = ExerciseUpdate {
            exercise_type: exercise_id.to_string(),
            status: entry.status,
            time_spent: increment,
            data: entry.data.clone(),
        };
        let completed_now = !was_completed && patch.status == Some(Status::Completed);
        let duration = entry.time_spent;

        self.total_time_spent = total;
        if completed_now {
            self.activity_history.insert(
                0,
                Activity::exercise_completed(exercise_id, duration, now.clone()),
            );
        }

        Ok(Operation::UpdateExercise(update))
    }

    /// Applies a training-day patch stamped at `now`.
    pub fn apply_day_patch(&mut self, day: u32, patch: &DayPatch, now: &Timestamp) -> Result<Operation> {
        let increment = patch.time_spent.unwrap_or(0);
        let total = add_minutes(self.total_time_spent, increment)?;
        let entry = self.training_days.get_mut(&day).ok_or(Error::UnknownDay(day))?;
        let entry_time = add_minutes(entry.time_spent, increment)?;

        let was_completed = entry.status.is_completed();
        if let Some(status) = patch.status {
            entry.status = status;
        }
        entry.time_spent = entry_time;
        entry.last_activity = Some(now.clone());

        let update = DayUpdate {
            day_number: day,
            status: entry.status,
            time_spent: increment,
        };
        let completed_now = !was_completed && patch.status == Some(Status::Completed);
        let duration = entry.time_spent;

        self.total_time_spent = total;
        if completed_now {
            self.activity_history
                .insert(0, Activity::day_completed(day, duration, now.clone()));
        }

        Ok(Operation::UpdateTrainingDay(update))
    }

    /// Replaces name and email.
    pub fn set_profile(&mut self, name: &str, email: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
    }
}

fn add_minutes(current: u64, increment: u64) -> Result<u64> {
    current
        .checked_add(increment)
        .ok_or(Error::TimeOverflow(increment))
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
