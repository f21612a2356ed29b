// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that need the backend, run without it.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    sync = { &["sync"], "sync needs a connection" },
    report = { &["report", "out.pdf"], "report needs a connection" },
    login = { &["login", "ana@example.com", "secret1"], "login needs a connection" },
    register = { &["register", "Ana", "ana@example.com", "secret1"], "register needs a connection" },
    logout = { &["logout"], "logout needs a connection" },
)]
fn backend_commands_fail_offline(args: &[&str], message: &str) {
    let temp = init_temp();

    offline(temp.path())
        .current_dir(temp.path())
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message))
        .stderr(predicate::str::contains("hint: drop --offline"));

    assert!(!temp.path().join("out.pdf").exists());
}

#[test]
fn changes_queue_while_offline() {
    let temp = init_temp();

    offline(temp.path())
        .args(["exercise", "email", "-s", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 change(s) waiting to sync"));
    offline(temp.path())
        .args(["exercise", "email", "-s", "completed", "-m", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 change(s) waiting to sync"));

    let queue = std::fs::read_to_string(
        data_dir(temp.path()).join("negotiation_training_sync_queue.json"),
    )
    .unwrap();
    let ops: serde_json::Value = serde_json::from_str(&queue).unwrap();
    let ops = ops.as_array().unwrap();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0]["kind"], "update_exercise");
    assert_eq!(ops[0]["payload"]["exerciseType"], "email");
    assert_eq!(ops[1]["payload"]["status"], "completed");
    assert_eq!(ops[1]["payload"]["timeSpent"], 30);
}

#[test]
fn unreachable_backend_keeps_queue() {
    let temp = init_temp();
    offline(temp.path())
        .args(["profile", "Ana", "ana@example.com"])
        .assert()
        .success();
    offline(temp.path())
        .args(["day", "2", "-s", "completed"])
        .assert()
        .success();

    parley(temp.path())
        .arg("--data-dir")
        .arg(data_dir(temp.path()))
        .args(["--remote", "http://127.0.0.1:9"])
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("sync did not complete"));

    offline(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pending:    1"));
}

#[test]
fn whoami_signed_out() {
    let temp = init_temp();

    offline(temp.path())
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not signed in"));
}

#[test]
fn invalid_remote_url_rejected() {
    let temp = TempDir::new().unwrap();

    offline(temp.path())
        .args(["--remote", "localhost:5000", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
