// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::display::format_record;
use crate::error::Result;
use crate::tracker::Tracker;

use super::require_record;

/// Print the local record, as text or as the JSON stored on disk.
pub fn run(tracker: &Tracker, json: bool, out: &mut impl Write) -> Result<()> {
    let record = require_record(tracker)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        write!(out, "{}", format_record(&record))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
