// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Profile and backend account commands.

use std::io::Write;

use crate::error::{Error, Result};
use crate::tracker::Tracker;

pub fn profile(tracker: &Tracker, name: &str, email: &str, out: &mut impl Write) -> Result<()> {
    tracker.try_update_user_profile(name, email)?;
    writeln!(out, "Profile set to {name} <{email}>.")?;
    Ok(())
}

pub async fn register(
    tracker: &Tracker,
    name: &str,
    email: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<()> {
    require_online(tracker, "register")?;
    let user = tracker.register_user(name, email, password).await?;
    writeln!(out, "Registered {} as user {}.", user.email, user.id)?;
    Ok(())
}

pub async fn login(tracker: &Tracker, email: &str, password: &str, out: &mut impl Write) -> Result<()> {
    require_online(tracker, "login")?;
    let user = tracker.login_user(email, password).await?;
    writeln!(out, "Logged in as user {}.", user.id)?;
    Ok(())
}

pub async fn logout(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    require_online(tracker, "logout")?;
    let pending = tracker.local().queue().len()?;
    tracker.logout_user().await?;
    writeln!(out, "Logged out; local progress cleared.")?;
    if pending > 0 {
        writeln!(out, "{pending} unsynced change(s) kept for the next sign-in.")?;
    }
    Ok(())
}

pub fn whoami(tracker: &Tracker, out: &mut impl Write) -> Result<()> {
    let user_id = tracker.local().user_id()?.ok_or(Error::NotSignedIn)?;
    writeln!(out, "user {user_id}")?;
    if let Some(record) = tracker.load_user_data()? {
        if !record.name.is_empty() {
            writeln!(out, "{} <{}>", record.name, record.email)?;
        }
    }
    Ok(())
}

fn require_online(tracker: &Tracker, operation: &'static str) -> Result<()> {
    if tracker.is_online() {
        Ok(())
    } else {
        Err(Error::Offline { operation })
    }
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
