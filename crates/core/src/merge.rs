// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconcile the local copy of a user record with the backend's copy.
//!
//! Merge rules:
//! - Identity (id, name, email): backend value unless empty
//! - Exercises / training days: per key, strictly newer `lastActivity` wins;
//!   absent or unparseable timestamps count as the epoch; ties go to the backend
//! - Activity history: union, newest first, one entry per (title, date),
//!   at most [`ACTIVITY_HISTORY_LIMIT`] entries
//! - Total time: the larger of the two totals (both already accumulate the
//!   same history, so summing would double count)
//! - `lastSync`: the time of the merge
//!
//! The merge never mutates its inputs and performs no I/O.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use crate::record::{Activity, DayState, ExerciseState, UserRecord};
use crate::timestamp::epoch_ms_or_zero;

/// Maximum number of activity entries kept after a merge.
pub const ACTIVITY_HISTORY_LIMIT: usize = 50;

/// Merges two optional records.
///
/// When one side is missing the other is returned unchanged, including its
/// `lastSync`.
pub fn merge(local: Option<&UserRecord>, remote: Option<&UserRecord>, now_ms: i64) -> Option<UserRecord> {
    match (local, remote) {
        (Some(local), Some(remote)) => Some(local.merged_with(remote, now_ms)),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}

impl UserRecord {
    /// Merges `self` (the local copy) with `remote` (the backend copy).
    pub fn merged_with(&self, remote: &UserRecord, now_ms: i64) -> UserRecord {
        UserRecord {
            id: remote.id.clone().filter(|id| !id.as_str().is_empty()).or_else(|| self.id.clone()),
            name: prefer_remote(&remote.name, &self.name),
            email: prefer_remote(&remote.email, &self.email),
            exercises: last_write_wins(&self.exercises, &remote.exercises, exercise_stamp),
            training_days: last_write_wins(&self.training_days, &remote.training_days, day_stamp),
            activity_history: merge_history(&self.activity_history, &remote.activity_history),
            total_time_spent: self.total_time_spent.max(remote.total_time_spent),
            last_sync: Some(now_ms),
        }
    }
}

fn prefer_remote(remote: &str, local: &str) -> String {
    if remote.is_empty() { local } else { remote }.to_string()
}

fn exercise_stamp(state: &ExerciseState) -> i64 {
    epoch_ms_or_zero(state.last_activity.as_ref())
}

fn day_stamp(state: &DayState) -> i64 {
    epoch_ms_or_zero(state.last_activity.as_ref())
}

/// Per-key last-write-wins over the union of both maps.
fn last_write_wins<K, V, F>(local: &BTreeMap<K, V>, remote: &BTreeMap<K, V>, stamp: F) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
    F: Fn(&V) -> i64,
{
    let keys: Vec<&K> = local.keys().chain(remote.keys()).collect();
    let mut merged = BTreeMap::new();

    for key in keys {
        if merged.contains_key(key) {
            continue;
        }
        let winner = match (local.get(key), remote.get(key)) {
            (Some(l), Some(r)) => {
                if stamp(l) > stamp(r) {
                    l
                } else {
                    r
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => continue,
        };
        merged.insert(key.clone(), winner.clone());
    }

    merged
}

/// Union of both histories, newest first, deduplicated and capped.
pub fn merge_history(local: &[Activity], remote: &[Activity]) -> Vec<Activity> {
    let mut all: Vec<&Activity> = local.iter().chain(remote.iter()).collect();
    // Stable: equal dates keep local-before-remote order.
    all.sort_by_key(|a| Reverse(a.date.epoch_ms()));

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut merged = Vec::new();
    for activity in all {
        if merged.len() == ACTIVITY_HISTORY_LIMIT {
            break;
        }
        if seen.insert(activity.identity()) {
            merged.push(activity.clone());
        }
    }
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
