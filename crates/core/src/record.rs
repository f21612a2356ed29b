// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The per-user progress record and its nested entries.
//!
//! Field names follow the JSON the backend and the local cache exchange
//! (`camelCase`, day keys as decimal strings).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Exercise};
use crate::error::{Error, Result};
use crate::timestamp::Timestamp;

/// Activity type for completed exercises.
pub const ACTIVITY_EXERCISE: &str = "exercise";
/// Activity type for completed training days.
pub const ACTIVITY_TRAINING: &str = "training";

/// Progress status of an exercise or training day.
///
/// The natural order is `not-started → in-progress → completed`, but any
/// status may overwrite any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not-started",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == Status::Completed
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "not-started" => Ok(Status::NotStarted),
            "in-progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Opaque backend user identifier.
///
/// The backend hands out integer ids; the local store keeps them as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => UserId(s),
            Raw::Number(n) => UserId(n.to_string()),
        })
    }
}

/// Treats `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Progress on one exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_spent: u64,
    #[serde(default)]
    pub last_activity: Option<Timestamp>,
    /// Free-form answers captured by the exercise form.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Map<String, Value>,
}

/// Progress on one training day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_spent: u64,
    #[serde(default)]
    pub last_activity: Option<Timestamp>,
}

/// An entry in the activity history.
///
/// Two activities are the same entry when title and date match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Activity {
    /// Activity for finishing an exercise.
    pub fn exercise_completed(exercise_id: &str, duration: u64, date: Timestamp) -> Self {
        Activity {
            title: format!("Concluiu: {}", catalog::exercise_name(exercise_id)),
            date,
            duration,
            kind: Some(ACTIVITY_EXERCISE.to_string()),
        }
    }

    /// Activity for finishing a training day.
    pub fn day_completed(day: u32, duration: u64, date: Timestamp) -> Self {
        Activity {
            title: format!("Concluiu: Dia {day} do Plano de Treino"),
            date,
            duration,
            kind: Some(ACTIVITY_TRAINING.to_string()),
        }
    }

    /// Deduplication identity.
    pub fn identity(&self) -> (&str, &str) {
        (&self.title, self.date.as_str())
    }
}

/// Everything the tracker knows about one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: BTreeMap<String, ExerciseState>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub training_days: BTreeMap<u32, DayState>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_history: Vec<Activity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_time_spent: u64,
    /// Epoch milliseconds of the last completed merge.
    #[serde(default)]
    pub last_sync: Option<i64>,
}

impl UserRecord {
    /// A fresh record: every exercise and day present and not started.
    pub fn initial() -> Self {
        let exercises = Exercise::ALL
            .iter()
            .map(|e| (e.as_str().to_string(), ExerciseState::default()))
            .collect();
        let training_days = catalog::days().map(|d| (d, DayState::default())).collect();

        UserRecord {
            exercises,
            training_days,
            ..UserRecord::default()
        }
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&ExerciseState> {
        self.exercises.get(exercise_id)
    }

    pub fn day(&self, day: u32) -> Option<&DayState> {
        self.training_days.get(&day)
    }

    /// Parses a record from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the record to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
