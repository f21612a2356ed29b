// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    offline = { Error::Offline { operation: "report" }, "report needs a connection" },
    not_signed_in = { Error::NotSignedIn, "parley login" },
    sync_incomplete = { Error::SyncIncomplete, "pending changes are kept" },
    no_runtime = { Error::NoRuntime, "runtime" },
    config = { Error::Config("bad url".into()), "config error: bad url" },
)]
fn test_error_display(err: Error, expected: &str) {
    let message = err.to_string();
    assert!(message.contains(expected), "{message}");
}

#[test]
fn test_core_error_is_transparent() {
    let err: Error = parley_core::Error::UnknownDay(15).into();
    assert!(err.to_string().starts_with("unknown training day: 15"));
}

#[test]
fn test_missing_record_hints_init() {
    let err: Error = parley_core::Error::MissingRecord.into();
    assert!(err.to_string().contains("parley init"));
}

#[test]
fn test_remote_error_keeps_server_message() {
    let err: Error = RemoteError::Rejected {
        status: 401,
        message: "Senha incorreta".into(),
    }
    .into();
    assert_eq!(err.to_string(), "remote error: Senha incorreta (HTTP 401)");
}

#[test]
fn test_from_io() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(err.to_string().starts_with("io error"));
}

#[test]
fn test_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().starts_with("json error"));
}
