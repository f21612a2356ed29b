// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod account;
pub mod init;
pub mod plan;
pub mod show;
pub mod status;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod update;

use parley_core::UserRecord;

use crate::error::Result;
use crate::tracker::Tracker;

/// Load the local record or fail with a hint to run `parley init`.
pub fn require_record(tracker: &Tracker) -> Result<UserRecord> {
    Ok(tracker
        .load_user_data()?
        .ok_or(parley_core::Error::MissingRecord)?)
}
