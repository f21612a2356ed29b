// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `parley sync` and `parley report`.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::display::format_last_sync;
use crate::error::{Error, Result};
use crate::tracker::Tracker;

pub async fn sync(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    if !tracker.is_online() {
        return Err(Error::Offline { operation: "sync" });
    }
    let pending = tracker.local().queue().len()?;
    if !tracker.sync_with_backend().await {
        return Err(Error::SyncIncomplete);
    }

    let last_sync = tracker.load_user_data()?.and_then(|r| r.last_sync);
    writeln!(
        out,
        "Synced {pending} change(s); last sync {}.",
        format_last_sync(last_sync)
    )?;
    Ok(())
}

pub async fn report(tracker: &Tracker, path: &Path, out: &mut impl Write) -> Result<()> {
    if !tracker.is_online() {
        return Err(Error::Offline { operation: "report" });
    }
    if tracker.local().user_id()?.is_none() {
        return Err(Error::NotSignedIn);
    }
    let bytes = tracker
        .generate_report()
        .await
        .ok_or(Error::ReportUnavailable)?;

    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "report saved");
    writeln!(out, "Wrote {} bytes to {}", bytes.len(), path.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
