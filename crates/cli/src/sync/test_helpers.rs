// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for sync and tracker tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use parley_core::{
    DayUpdate, ExerciseUpdate, Operation, PendingOperation, Status, UserId, UserRecord,
};

use super::remote::{
    NewUser, Remote, RemoteError, RemoteFuture, RemoteResult, SessionStatus, UserSummary,
};

/// Build a queued exercise update.
pub fn exercise_op(exercise: &str, enqueued_at: i64) -> PendingOperation {
    PendingOperation::new(
        Operation::UpdateExercise(ExerciseUpdate {
            exercise_type: exercise.to_string(),
            status: Status::InProgress,
            time_spent: 5,
            data: Default::default(),
        }),
        enqueued_at,
    )
}

/// Build a queued training-day update.
pub fn day_op(day: u32, enqueued_at: i64) -> PendingOperation {
    PendingOperation::new(
        Operation::UpdateTrainingDay(DayUpdate {
            day_number: day,
            status: Status::Completed,
            time_spent: 10,
        }),
        enqueued_at,
    )
}

#[derive(Default)]
struct MockState {
    users: HashMap<String, UserRecord>,
    accounts: HashMap<String, (String, UserId)>,
    next_id: u64,
    session: Option<UserId>,
    unreachable: bool,
    fail_put: Option<usize>,
    puts: usize,
    calls: Vec<String>,
    keys: Vec<String>,
    report: Vec<u8>,
}

/// Scripted in-process backend.
///
/// Keeps one record per user and applies exercise/day updates to it the way
/// the real backend does (status and data replaced, time accumulated).
#[derive(Default)]
pub struct MockRemote {
    state: Mutex<MockState>,
}

impl MockRemote {
    pub fn new() -> Self {
        let mock = Self::default();
        mock.state().next_id = 1;
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Seed a backend record.
    pub fn with_user(self, id: &str, record: UserRecord) -> Self {
        self.state().users.insert(id.to_string(), record);
        self
    }

    /// Seed a login account.
    pub fn with_account(self, email: &str, password: &str, id: &str) -> Self {
        let mut state = self.state();
        state
            .accounts
            .insert(email.to_string(), (password.to_string(), UserId::new(id)));
        state
            .users
            .entry(id.to_string())
            .or_insert_with(UserRecord::initial);
        drop(state);
        self
    }

    pub fn with_report(self, bytes: &[u8]) -> Self {
        self.state().report = bytes.to_vec();
        self
    }

    /// Make every call fail with a network error.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state().unreachable = unreachable;
    }

    /// Make the `n`th update (1-based, across both kinds) fail.
    pub fn fail_put_number(&self, n: usize) {
        self.state().fail_put = Some(n);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn idempotency_keys(&self) -> Vec<String> {
        self.state().keys.clone()
    }

    pub fn user(&self, id: &str) -> Option<UserRecord> {
        self.state().users.get(id).cloned()
    }

    fn begin(&self, call: String) -> RemoteResult<MutexGuard<'_, MockState>> {
        let mut state = self.state();
        state.calls.push(call);
        if state.unreachable {
            return Err(RemoteError::Network("connection refused".into()));
        }
        Ok(state)
    }

    fn begin_put(&self, call: String, key: String) -> RemoteResult<MutexGuard<'_, MockState>> {
        let mut state = self.begin(call)?;
        state.puts += 1;
        state.keys.push(key);
        if state.fail_put == Some(state.puts) {
            return Err(RemoteError::Rejected {
                status: 500,
                message: "internal error".into(),
            });
        }
        Ok(state)
    }
}

fn not_found() -> RemoteError {
    RemoteError::Rejected {
        status: 404,
        message: "Usuário não encontrado".into(),
    }
}

impl Remote for MockRemote {
    fn create_user(&self, user: NewUser) -> RemoteFuture<'_, UserSummary> {
        Box::pin(async move {
            let mut state = self.begin(format!("create_user {}", user.email))?;
            let id = state.next_id.to_string();
            state.next_id += 1;
            let mut record = UserRecord::initial();
            record.set_profile(&user.name, &user.email);
            record.id = Some(UserId::new(&id));
            state.users.insert(id.clone(), record);
            if let Some(password) = user.password {
                state
                    .accounts
                    .insert(user.email.clone(), (password, UserId::new(&id)));
            }
            Ok(UserSummary {
                id: UserId::new(id),
                name: user.name,
                email: user.email,
            })
        })
    }

    fn login(&self, email: String, password: String) -> RemoteFuture<'_, UserSummary> {
        Box::pin(async move {
            let mut state = self.begin(format!("login {email}"))?;
            let Some((expected, id)) = state.accounts.get(&email).cloned() else {
                return Err(not_found());
            };
            if expected != password {
                return Err(RemoteError::Rejected {
                    status: 401,
                    message: "Senha incorreta".into(),
                });
            }
            state.session = Some(id.clone());
            Ok(UserSummary {
                id,
                name: String::new(),
                email,
            })
        })
    }

    fn logout(&self) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let mut state = self.begin("logout".into())?;
            state.session = None;
            Ok(())
        })
    }

    fn check_session(&self) -> RemoteFuture<'_, SessionStatus> {
        Box::pin(async move {
            let state = self.begin("check_session".into())?;
            Ok(SessionStatus {
                authenticated: state.session.is_some(),
                user_id: state.session.clone(),
            })
        })
    }

    fn fetch_user(&self, id: UserId) -> RemoteFuture<'_, UserRecord> {
        Box::pin(async move {
            let state = self.begin(format!("fetch_user {id}"))?;
            state.users.get(id.as_str()).cloned().ok_or_else(not_found)
        })
    }

    fn put_exercise(
        &self,
        user_id: UserId,
        update: ExerciseUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let call = format!("put_exercise {user_id} {}", update.exercise_type);
            let mut state = self.begin_put(call, idempotency_key)?;
            let record = state.users.get_mut(user_id.as_str()).ok_or_else(not_found)?;
            let entry = record
                .exercises
                .entry(update.exercise_type.clone())
                .or_default();
            entry.status = update.status;
            entry.time_spent += update.time_spent;
            entry.data = update.data;
            record.total_time_spent += update.time_spent;
            Ok(())
        })
    }

    fn put_training_day(
        &self,
        user_id: UserId,
        update: DayUpdate,
        idempotency_key: String,
    ) -> RemoteFuture<'_, ()> {
        Box::pin(async move {
            let call = format!("put_training_day {user_id} {}", update.day_number);
            let mut state = self.begin_put(call, idempotency_key)?;
            let record = state.users.get_mut(user_id.as_str()).ok_or_else(not_found)?;
            let entry = record.training_days.entry(update.day_number).or_default();
            entry.status = update.status;
            entry.time_spent += update.time_spent;
            record.total_time_spent += update.time_spent;
            Ok(())
        })
    }

    fn fetch_report(&self, user_id: UserId) -> RemoteFuture<'_, Vec<u8>> {
        Box::pin(async move {
            let state = self.begin(format!("fetch_report {user_id}"))?;
            if !state.users.contains_key(user_id.as_str()) {
                return Err(not_found());
            }
            Ok(state.report.clone())
        })
    }
}
