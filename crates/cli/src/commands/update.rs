// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `parley exercise` and `parley day`.

use std::io::Write;

use parley_core::{catalog, DayPatch, ExercisePatch};

use crate::cli::ChangeArgs;
use crate::display::status_label;
use crate::error::Result;
use crate::tracker::Tracker;

use super::require_record;

pub fn exercise(tracker: &Tracker, id: &str, change: &ChangeArgs, out: &mut impl Write) -> Result<()> {
    let patch = ExercisePatch {
        status: change.status,
        time_spent: change.minutes,
        data: None,
    };
    tracker.try_update_exercise(id, &patch)?;

    let record = require_record(tracker)?;
    if let Some(state) = record.exercise(id) {
        writeln!(
            out,
            "{} ({}): {}, {} min",
            catalog::exercise_name(id),
            id,
            status_label(state.status),
            state.time_spent
        )?;
    }
    print_queued(tracker, out)
}

pub fn day(tracker: &Tracker, day: u32, change: &ChangeArgs, out: &mut impl Write) -> Result<()> {
    let patch = DayPatch {
        status: change.status,
        time_spent: change.minutes,
    };
    tracker.try_update_training_day(day, &patch)?;

    let record = require_record(tracker)?;
    if let Some(state) = record.day(day) {
        writeln!(
            out,
            "Day {day}: {}, {} min",
            status_label(state.status),
            state.time_spent
        )?;
    }
    print_queued(tracker, out)
}

fn print_queued(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    if !tracker.is_online() {
        let pending = tracker.local().queue().len()?;
        writeln!(out, "Saved locally; {pending} change(s) waiting to sync.")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
