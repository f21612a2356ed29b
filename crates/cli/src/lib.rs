// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! parley - offline-first progress tracking for the negotiation skills course.
//!
//! This crate provides the `parley` CLI and the session layer behind it.
//! Progress is written to a local store first and pushed to the course
//! backend by background sync passes whenever it is reachable.
//!
//! # Main Components
//!
//! - [`Tracker`] - session context: local store, backend client, connectivity
//! - [`store`] - key-value persistence ([`FileStore`](store::FileStore), [`LocalStore`](store::LocalStore))
//! - [`sync`] - pending-operation queue, backend client and sync coordinator
//! - [`Settings`] - configuration resolved from file, environment and flags
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! let settings = Settings::resolve(Config::discover(None)?, &Overrides::from_env(), &Overrides::default())?;
//! let tracker = parley::open_tracker(&settings)?;
//! tracker.init().await?;
//! tracker.update_exercise("batna", &ExercisePatch::status(Status::Completed));
//! tracker.settle().await;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod env;
pub mod error;
pub mod store;
pub mod sync;
pub mod tracker;

pub use cli::{ChangeArgs, Cli, Command};
pub use config::{Config, Overrides, Settings};
pub use error::{Error, Result};
pub use tracker::{InitStatus, Tracker};

use std::io::Write;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::store::{FileStore, LocalStore};
use crate::sync::{HttpRemote, NetworkStatus};

/// Default log filter when neither `-v` nor `PARLEY_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run a parsed command line to completion, including any background sync
/// it started.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;
    let flags = Overrides {
        data_dir: cli.data_dir.clone(),
        remote_url: cli.remote.clone(),
        offline: cli.offline.then_some(true),
    };
    let settings = Settings::resolve(config, &Overrides::from_env(), &flags)?;
    debug!(?settings, "resolved settings");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let tracker = open_tracker(&settings)?;
        let mut stdout = std::io::stdout().lock();
        let result = execute(&tracker, cli.command, &mut stdout).await;
        tracker.settle().await;
        result
    })
}

/// Build a tracker over the on-disk store and the HTTP backend. Must be
/// called from within a tokio runtime.
pub fn open_tracker(settings: &Settings) -> Result<Tracker> {
    let local = LocalStore::new(Arc::new(FileStore::open(&settings.data_dir)?));
    let remote = HttpRemote::new(&settings.remote_url, settings.timeout, local.clone())?;
    Tracker::new(
        local,
        Arc::new(remote),
        NetworkStatus::from_online(!settings.offline),
    )
}

/// Dispatch one command against `tracker`, writing user-facing output to `out`.
pub async fn execute(tracker: &Tracker, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Init => commands::init::run(tracker, out).await,
        Command::Status => commands::status::run(tracker, out),
        Command::Show { json } => commands::show::run(tracker, json, out),
        Command::Exercise { id, change } => commands::update::exercise(tracker, &id, &change, out),
        Command::Day { day, change } => commands::update::day(tracker, day, &change, out),
        Command::Plan => commands::plan::run(tracker, out),
        Command::Profile { name, email } => commands::account::profile(tracker, &name, &email, out),
        Command::Register {
            name,
            email,
            password,
        } => commands::account::register(tracker, &name, &email, &password, out).await,
        Command::Login { email, password } => {
            commands::account::login(tracker, &email, &password, out).await
        }
        Command::Logout => commands::account::logout(tracker, out).await,
        Command::Whoami => commands::account::whoami(tracker, out),
        Command::Sync => commands::sync::sync(tracker, out).await,
        Command::Report { out: path } => commands::sync::report(tracker, &path, out).await,
    }
}

/// Pick the log filter: `-v` means debug, `-vv` trace, otherwise the
/// `PARLEY_LOG` directive, otherwise warnings only.
pub fn log_directive(verbose: u8, env_filter: Option<String>) -> String {
    match verbose {
        0 => env_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_logging(verbose: u8) {
    let directive = log_directive(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
