// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::display::format_plan;
use crate::error::Result;
use crate::tracker::Tracker;

use super::require_record;

pub fn run(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let record = require_record(tracker)?;
    write!(out, "{}", format_plan(&record))?;
    Ok(())
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
