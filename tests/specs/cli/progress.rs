// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress tracking through the CLI with the backend switched off.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

#[path = "common.rs"]
mod common;

use common::*;
use yare::parameterized;

#[test]
fn init_creates_record() {
    let temp = TempDir::new().unwrap();

    offline(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local progress ready."))
        .stdout(predicate::str::contains("Network: offline"));

    assert!(data_dir(temp.path())
        .join("negotiation_training_user_data.json")
        .exists());
    let record = show_json(temp.path());
    assert_eq!(record["exercises"].as_object().unwrap().len(), 10);
    assert_eq!(record["trainingDays"].as_object().unwrap().len(), 14);
    assert_eq!(record["totalTimeSpent"], 0);
}

#[test]
fn status_before_init_fails() {
    let temp = TempDir::new().unwrap();

    offline(temp.path())
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("parley init"));
}

#[test]
fn exercise_completion_recorded() {
    let temp = init_temp();

    offline(temp.path())
        .args(["exercise", "batna", "--status", "completed", "--minutes", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mapa BATNA (batna): completed, 25 min"));

    let record = show_json(temp.path());
    assert_eq!(record["exercises"]["batna"]["status"], "completed");
    assert_eq!(record["exercises"]["batna"]["timeSpent"], 25);
    assert_eq!(record["totalTimeSpent"], 25);
    let history = record["activityHistory"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0]["title"].as_str().unwrap().contains("Mapa BATNA"));
}

#[test]
fn minutes_accumulate_across_runs() {
    let temp = init_temp();

    for minutes in ["10", "20"] {
        offline(temp.path())
            .args(["day", "4", "-m", minutes])
            .assert()
            .success();
    }

    let record = show_json(temp.path());
    assert_eq!(record["trainingDays"]["4"]["timeSpent"], 30);
    assert_eq!(record["trainingDays"]["4"]["status"], "not-started");
    assert_eq!(record["totalTimeSpent"], 30);
}

#[parameterized(
    unknown_exercise = { &["exercise", "nope", "-s", "completed"], "nope" },
    day_zero = { &["day", "0", "-s", "completed"], "0" },
    day_fifteen = { &["day", "15", "-s", "completed"], "15" },
)]
fn invalid_target_leaves_record_untouched(args: &[&str], mentioned: &str) {
    let temp = init_temp();
    let before = show_json(temp.path());

    offline(temp.path())
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(mentioned));

    assert_eq!(show_json(temp.path()), before);
}

#[test]
fn change_requires_status_or_minutes() {
    let temp = init_temp();

    offline(temp.path())
        .args(["exercise", "batna"])
        .assert()
        .failure();
}

#[test]
fn invalid_status_rejected() {
    let temp = init_temp();

    offline(temp.path())
        .args(["exercise", "batna", "--status", "finished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finished"));
}

#[test]
fn status_summary() {
    let temp = init_temp();
    offline(temp.path())
        .args(["exercise", "spin", "-s", "completed", "-m", "90"])
        .assert()
        .success();
    offline(temp.path())
        .args(["day", "1", "-s", "completed"])
        .assert()
        .success();

    offline(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercises:  1/10"))
        .stdout(predicate::str::contains("Days:       1/14"))
        .stdout(predicate::str::contains("Overall:    8%"))
        .stdout(predicate::str::contains("Time spent: 1h 30m"))
        .stdout(predicate::str::contains("Pending:    2"))
        .stdout(predicate::str::contains("Last sync:  never"));
}

#[test]
fn plan_shows_fourteen_days() {
    let temp = init_temp();
    offline(temp.path())
        .args(["day", "5", "-s", "in-progress"])
        .assert()
        .success();

    let output = offline(temp.path()).arg("plan").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines[4].contains("Role-play SPIN"));
    assert!(lines[4].ends_with("in progress"));
    assert!(lines[5].contains("Role-play SPIN"));
}

#[test]
fn profile_saved_locally() {
    let temp = init_temp();

    offline(temp.path())
        .args(["profile", "Ana", "ana@example.com"])
        .assert()
        .success();

    let record = show_json(temp.path());
    assert_eq!(record["name"], "Ana");
    assert_eq!(record["email"], "ana@example.com");
}

#[test]
fn data_dir_from_environment() {
    let temp = TempDir::new().unwrap();

    parley(temp.path())
        .env("PARLEY_DATA_DIR", temp.path().join("env-data"))
        .env("PARLEY_OFFLINE", "1")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Network: offline"));

    assert!(temp
        .path()
        .join("env-data")
        .join("negotiation_training_user_data.json")
        .exists());
}
