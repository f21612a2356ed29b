// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of records for the terminal.

use std::fmt::Write;

use parley_core::progress::format_minutes;
use parley_core::{catalog, day_exercise, Exercise, ProgressSummary, Status, Timestamp, UserRecord};

/// Width of the name column in tables.
const NAME_WIDTH: usize = 28;

/// Shown in place of an activity date that does not parse.
const UNKNOWN_DATE: &str = "unknown date";

/// Short status label used in tables.
pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::NotStarted => "not started",
        Status::InProgress => "in progress",
        Status::Completed => "completed",
    }
}

pub fn format_last_sync(last_sync: Option<i64>) -> String {
    match last_sync {
        Some(ms) => Timestamp::from_millis(ms).to_string(),
        None => "never".to_string(),
    }
}

/// Multi-line progress summary for `parley status`.
pub fn format_summary(record: &UserRecord, pending: usize, online: bool) -> String {
    let summary = ProgressSummary::of(record);
    let mut out = String::new();

    if !record.name.is_empty() {
        let _ = writeln!(out, "{} <{}>", record.name, record.email);
    }
    let _ = writeln!(
        out,
        "Exercises:  {}/{}",
        summary.completed_exercises,
        Exercise::ALL.len()
    );
    let _ = writeln!(out, "Days:       {}/{}", summary.completed_days, catalog::DAY_COUNT);
    let _ = writeln!(out, "Overall:    {}%", summary.percent);
    let _ = writeln!(out, "Time spent: {}", summary.total_time());
    let _ = writeln!(out, "Pending:    {pending}");
    let _ = writeln!(out, "Last sync:  {}", format_last_sync(record.last_sync));
    let _ = writeln!(out, "Network:    {}", if online { "online" } else { "offline" });
    if summary.course_complete() {
        let _ = writeln!(out, "Course complete!");
    }
    out
}

/// Full record: exercises, days and recent activity.
pub fn format_record(record: &UserRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Exercises:");
    for (id, state) in &record.exercises {
        let _ = writeln!(
            out,
            "  {:<12} {:<width$} {:<12} {:>8}",
            id,
            catalog::exercise_name(id),
            status_label(state.status),
            format_minutes(state.time_spent),
            width = NAME_WIDTH
        );
    }

    let _ = writeln!(out, "Training days:");
    for (day, state) in &record.training_days {
        let _ = writeln!(
            out,
            "  {:>2} {:<12} {:>8}",
            day,
            status_label(state.status),
            format_minutes(state.time_spent)
        );
    }

    let _ = writeln!(out, "Activity:");
    if record.activity_history.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for activity in &record.activity_history {
        let date = if activity.date.is_valid() {
            activity.date.as_str()
        } else {
            UNKNOWN_DATE
        };
        let _ = writeln!(
            out,
            "  {}  {} ({})",
            date,
            activity.title,
            format_minutes(activity.duration)
        );
    }

    let _ = writeln!(out, "Total time: {}", format_minutes(record.total_time_spent));
    out
}

/// The 14-day plan: each day's exercise, its suggested duration and the
/// day's status.
pub fn format_plan(record: &UserRecord) -> String {
    let mut out = String::new();
    for day in catalog::days() {
        let exercise = day_exercise(day);
        let name = exercise.map(|e| e.name()).unwrap_or(catalog::UNKNOWN_EXERCISE_NAME);
        let minutes = exercise.map(|e| e.suggested_minutes()).unwrap_or(0);
        let status = record
            .day(day)
            .map(|d| status_label(d.status))
            .unwrap_or("-");
        let _ = writeln!(
            out,
            "Day {day:>2}  {name:<width$} {minutes:>3} min  {status}",
            width = NAME_WIDTH
        );
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
