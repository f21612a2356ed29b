// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `PARLEY_DATA_DIR` if set and non-empty.
pub fn data_dir() -> Option<PathBuf> {
    non_empty(vars::PARLEY_DATA_DIR).map(PathBuf::from)
}

/// Returns the value of `PARLEY_REMOTE_URL` if set and non-empty.
pub fn remote_url() -> Option<String> {
    non_empty(vars::PARLEY_REMOTE_URL)
}

/// `PARLEY_OFFLINE`: `1`/`true`/`yes` force offline, `0`/`false`/`no` force
/// online, anything else (or unset) leaves the choice to other sources.
pub fn offline() -> Option<bool> {
    parse_flag(&non_empty(vars::PARLEY_OFFLINE)?)
}

/// Returns the `PARLEY_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::PARLEY_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
