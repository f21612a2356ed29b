// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;

#[tokio::test]
async fn test_init_offline_creates_record() {
    let ctx = TestContext::offline();
    let mut out = Vec::new();

    run(&ctx.tracker, &mut out).await.unwrap();

    let text = TestContext::text(out);
    assert!(text.contains("Local progress ready."));
    assert!(text.contains("Network: offline"));
    assert!(text.contains("Not signed in"));
    assert_eq!(ctx.record(), parley_core::UserRecord::initial());
    assert!(ctx.remote.calls().is_empty());
}

#[tokio::test]
async fn test_init_keeps_existing_record() {
    let ctx = TestContext::offline().with_record();
    ctx.tracker
        .try_update_training_day(1, &parley_core::DayPatch::status(parley_core::Status::Completed))
        .unwrap();
    let mut out = Vec::new();

    run(&ctx.tracker, &mut out).await.unwrap();

    assert!(ctx.record().day(1).unwrap().status.is_completed());
}

#[tokio::test]
async fn test_init_online_with_session() {
    let ctx = TestContext::online_with_account();
    ctx.tracker
        .login_user("ana@example.com", "secret1")
        .await
        .unwrap();
    ctx.tracker.settle().await;
    let mut out = Vec::new();

    run(&ctx.tracker, &mut out).await.unwrap();
    ctx.tracker.settle().await;

    let text = TestContext::text(out);
    assert!(text.contains("Network: online"));
    assert!(text.contains("Signed in as user 7."));
}

#[tokio::test]
async fn test_init_online_without_session_keeps_stored_id() {
    let ctx = TestContext::online_with_account().signed_in_as("7");
    let mut out = Vec::new();

    run(&ctx.tracker, &mut out).await.unwrap();
    ctx.tracker.settle().await;

    let text = TestContext::text(out);
    assert!(text.contains("Linked to user 7 (session not verified)."));
}
