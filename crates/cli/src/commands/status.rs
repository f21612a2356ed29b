// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::display::format_summary;
use crate::error::Result;
use crate::tracker::Tracker;

use super::require_record;

pub fn run(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let record = require_record(tracker)?;
    let pending = tracker.local().queue().len()?;
    write!(out, "{}", format_summary(&record, pending, tracker.is_online()))?;
    Ok(())
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
