// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use parley_core::Status;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline-first progress tracker for the negotiation skills course")]
#[command(
    long_about = "Offline-first progress tracker for the negotiation skills course.\n\n\
    Progress is saved locally first and synchronized with the course backend whenever it is reachable."
)]
pub struct Cli {
    /// Work offline: never contact the backend
    #[arg(long, global = true)]
    pub offline: bool,

    /// Read configuration from <path> instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Keep local data in <dir>
    #[arg(long, global = true, value_name = "dir")]
    pub data_dir: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, value_name = "url")]
    pub remote: Option<String>,

    /// Log more (repeat for trace output)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Change to apply to an exercise or training day.
#[derive(clap::Args, Debug, Clone, Default)]
#[command(group(ArgGroup::new("change").required(true).multiple(true).args(["status", "minutes"])))]
pub struct ChangeArgs {
    /// New status: not-started, in-progress or completed
    #[arg(short, long)]
    pub status: Option<Status>,

    /// Minutes spent, added to the running total
    #[arg(short, long)]
    pub minutes: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare local storage and check the backend session
    Init,

    /// Show a progress summary
    Status,

    /// Print the full local record
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Update an exercise
    #[command(after_help = "\
Examples:
  parley exercise batna --status completed --minutes 25
  parley exercise spin -s in-progress
  parley exercise meso -m 15")]
    Exercise {
        /// Exercise id (batna, meso, concessoes, spin, ancora, email, gravacao, taticas, framing, pos)
        id: String,
        #[command(flatten)]
        change: ChangeArgs,
    },

    /// Update a day of the 14-day training plan
    Day {
        /// Day number (1-14)
        day: u32,
        #[command(flatten)]
        change: ChangeArgs,
    },

    /// Show the 14-day training plan
    Plan,

    /// Set your name and email
    Profile {
        #[arg(value_parser = non_empty_string)]
        name: String,
        #[arg(value_parser = non_empty_string)]
        email: String,
    },

    /// Create a backend account
    Register {
        #[arg(value_parser = non_empty_string)]
        name: String,
        #[arg(value_parser = non_empty_string)]
        email: String,
        password: String,
    },

    /// Sign in to the backend
    Login {
        #[arg(value_parser = non_empty_string)]
        email: String,
        password: String,
    },

    /// Sign out and forget local progress
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Synchronize with the backend now
    Sync,

    /// Download the progress report (PDF)
    Report {
        /// Where to write the report
        out: PathBuf,
    },
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
