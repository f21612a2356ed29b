// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire timestamps.
//!
//! Timestamps travel as text and are kept verbatim so that round-tripping a
//! record never rewrites them. Two spellings are understood when comparing:
//! RFC 3339 (what the tracker writes) and the backend's SQL form
//! `YYYY-MM-DD HH:MM:SS` in UTC. Anything else compares as the Unix epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A timestamp as stored in a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Wraps raw timestamp text without validating it.
    pub fn new(raw: impl Into<String>) -> Self {
        Timestamp(raw.into())
    }

    /// Formats epoch milliseconds as RFC 3339 UTC with millisecond precision.
    pub fn from_millis(ms: i64) -> Self {
        let dt = DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default();
        Timestamp(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Returns the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Milliseconds since the Unix epoch, or 0 when the text is not a
    /// recognised timestamp.
    pub fn epoch_ms(&self) -> i64 {
        parse_epoch_ms(&self.0).unwrap_or(0)
    }

    /// Returns true if the text parses as a timestamp.
    pub fn is_valid(&self) -> bool {
        parse_epoch_ms(&self.0).is_some()
    }
}

/// Epoch milliseconds of an optional timestamp; absent compares as 0.
pub fn epoch_ms_or_zero(ts: Option<&Timestamp>) -> i64 {
    ts.map(Timestamp::epoch_ms).unwrap_or(0)
}

fn parse_epoch_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    // Date-only strings are midnight UTC.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::new(raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Millis(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Timestamp(s),
            Raw::Millis(ms) => Timestamp::from_millis(ms),
            Raw::Float(ms) => Timestamp::from_millis(ms as i64),
        })
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
