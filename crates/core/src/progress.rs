// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Course progress derived from a user record.

use std::fmt;

use crate::catalog::{self, Exercise, DAY_COUNT};
use crate::record::UserRecord;

/// Snapshot of how far a user is through the course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed_exercises: usize,
    pub completed_days: usize,
    /// Rounded share of exercises and days completed, 0..=100.
    pub percent: u32,
    pub total_minutes: u64,
}

impl ProgressSummary {
    pub fn of(record: &UserRecord) -> Self {
        let completed_exercises = Exercise::ALL
            .iter()
            .filter(|e| record.exercise(e.as_str()).is_some_and(|s| s.status.is_completed()))
            .count();
        let completed_days = catalog::days()
            .filter(|d| record.day(*d).is_some_and(|s| s.status.is_completed()))
            .count();

        let total = Exercise::ALL.len() + DAY_COUNT as usize;
        let done = completed_exercises + completed_days;
        let percent = ((done as f64 / total as f64) * 100.0).round() as u32;

        ProgressSummary {
            completed_exercises,
            completed_days,
            percent,
            total_minutes: record.total_time_spent,
        }
    }

    pub fn course_complete(&self) -> bool {
        self.completed_exercises == Exercise::ALL.len() && self.completed_days == DAY_COUNT as usize
    }

    /// Total time as `Hh Mm`.
    pub fn total_time(&self) -> String {
        format_minutes(self.total_minutes)
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} exercises, {}/{} days, {})",
            self.percent,
            self.completed_exercises,
            Exercise::ALL.len(),
            self.completed_days,
            DAY_COUNT,
            self.total_time()
        )
    }
}

pub fn format_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
