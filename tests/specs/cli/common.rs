// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `parley` isolated from the caller's environment and config file.
pub fn parley(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("parley").unwrap();
    for var in ["PARLEY_DATA_DIR", "PARLEY_REMOTE_URL", "PARLEY_OFFLINE", "PARLEY_LOG"] {
        cmd.env_remove(var);
    }
    cmd.arg("--config").arg(home.join("config.toml"));
    cmd
}

/// `parley --offline --data-dir <home>/data`.
pub fn offline(home: &Path) -> Command {
    let mut cmd = parley(home);
    cmd.arg("--offline").arg("--data-dir").arg(data_dir(home));
    cmd
}

pub fn data_dir(home: &Path) -> PathBuf {
    home.join("data")
}

/// A temp home with an initialized offline data directory.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    offline(temp.path()).arg("init").assert().success();
    temp
}

/// The stored record, parsed from `show --json`.
pub fn show_json(home: &Path) -> serde_json::Value {
    let output = offline(home).args(["show", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}
