// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;
use yare::parameterized;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::PARLEY_DATA_DIR, "PARLEY_DATA_DIR");
    assert_eq!(vars::PARLEY_REMOTE_URL, "PARLEY_REMOTE_URL");
    assert_eq!(vars::PARLEY_OFFLINE, "PARLEY_OFFLINE");
    assert_eq!(vars::PARLEY_LOG, "PARLEY_LOG");
}

#[parameterized(
    one = { "1", Some(true) },
    true_word = { "true", Some(true) },
    yes_upper = { "YES", Some(true) },
    zero = { "0", Some(false) },
    false_word = { "False", Some(false) },
    no = { "no", Some(false) },
    padded = { " 1 ", Some(true) },
    garbage = { "maybe", None },
)]
fn test_parse_flag(value: &str, expected: Option<bool>) {
    assert_eq!(parse_flag(value), expected);
}

#[test]
fn test_data_dir_set_and_unset() {
    std::env::remove_var("PARLEY_DATA_DIR");
    assert_eq!(data_dir(), None);

    std::env::set_var("PARLEY_DATA_DIR", "/tmp/parley-test");
    assert_eq!(data_dir(), Some(PathBuf::from("/tmp/parley-test")));

    std::env::set_var("PARLEY_DATA_DIR", "  ");
    assert_eq!(data_dir(), None);
    std::env::remove_var("PARLEY_DATA_DIR");
}

#[test]
fn test_remote_url() {
    std::env::set_var("PARLEY_REMOTE_URL", "http://example.com");
    assert_eq!(remote_url().as_deref(), Some("http://example.com"));
    std::env::remove_var("PARLEY_REMOTE_URL");
    assert_eq!(remote_url(), None);
}

#[test]
fn test_offline() {
    std::env::set_var("PARLEY_OFFLINE", "1");
    assert_eq!(offline(), Some(true));
    std::env::set_var("PARLEY_OFFLINE", "0");
    assert_eq!(offline(), Some(false));
    std::env::remove_var("PARLEY_OFFLINE");
    assert_eq!(offline(), None);
}

#[test]
fn test_log_filter() {
    std::env::set_var("PARLEY_LOG", "parley=debug");
    assert_eq!(log_filter().as_deref(), Some("parley=debug"));
    std::env::remove_var("PARLEY_LOG");
    assert_eq!(log_filter(), None);
}
