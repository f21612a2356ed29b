// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::error::Result;
use crate::tracker::Tracker;

pub async fn run(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let status = tracker.init().await?;

    writeln!(out, "Local progress ready.")?;
    writeln!(
        out,
        "Network: {}",
        if status.online { "online" } else { "offline" }
    )?;
    match (&status.user_id, status.authenticated) {
        (Some(id), true) => writeln!(out, "Signed in as user {id}.")?,
        (Some(id), false) => writeln!(out, "Linked to user {id} (session not verified).")?,
        (None, _) => writeln!(out, "Not signed in; progress stays on this machine until you register or log in.")?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
