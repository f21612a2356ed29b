// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker session: the entry point used by front ends.
//!
//! A [`Tracker`] owns the local store, the backend client, the connectivity
//! publisher and the sync coordinator. Mutations complete their local write
//! before returning and schedule a background sync pass when online; the
//! caller never waits for the backend unless it asks to via
//! [`Tracker::sync_with_backend`] or [`Tracker::settle`].
//!
//! Connectivity changes are observed by a task started with the tracker:
//! going online starts a sync pass, going offline notifies the user. This
//! holds whoever publishes the change, [`Tracker::set_online`] or a clone of
//! [`Tracker::connectivity`].

use std::sync::{Arc, Mutex};

use parley_core::{
    ClockSource, DayPatch, ExercisePatch, Operation, PendingOperation, SystemClock, Timestamp,
    UserId, UserRecord,
};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::store::LocalStore;
use crate::sync::{
    Connectivity, LogNotifier, NetworkObserver, NetworkStatus, NewUser, Notifier, Remote,
    SyncCoordinator, UserSummary,
};

const OFFLINE_NOTICE: &str = "you are offline: changes are saved locally and will sync later";
const REPORT_OFFLINE_NOTICE: &str = "reports cannot be generated while offline";

/// Snapshot returned by [`Tracker::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitStatus {
    pub online: bool,
    pub authenticated: bool,
    pub user_id: Option<UserId>,
}

/// Session context for one data directory and one backend.
pub struct Tracker {
    local: LocalStore,
    remote: Arc<dyn Remote>,
    clock: Arc<dyn ClockSource>,
    connectivity: Connectivity,
    coordinator: Arc<SyncCoordinator>,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
    tasks: Arc<Tasks>,
    /// Transitions the connectivity watcher has finished reacting to.
    handled: watch::Receiver<u64>,
    watcher: JoinHandle<()>,
}

type Tasks = Mutex<Vec<JoinHandle<()>>>;

impl Tracker {
    /// Build a tracker. Must be called from within a tokio runtime, which
    /// then runs the background sync passes.
    pub fn new(local: LocalStore, remote: Arc<dyn Remote>, status: NetworkStatus) -> Result<Self> {
        Self::with_parts(
            local,
            remote,
            Arc::new(SystemClock),
            Connectivity::new(status),
            Arc::new(LogNotifier),
        )
    }

    pub fn with_parts(
        local: LocalStore,
        remote: Arc<dyn Remote>,
        clock: Arc<dyn ClockSource>,
        connectivity: Connectivity,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let coordinator = Arc::new(SyncCoordinator::new(
            local.clone(),
            Arc::clone(&remote),
            Arc::clone(&clock),
            connectivity.subscribe(),
        ));
        let tasks = Arc::new(Mutex::new(Vec::new()));
        let (handled_tx, handled) = watch::channel(connectivity.transitions());
        let watcher = runtime.spawn(watch_network(
            connectivity.observe(),
            Arc::clone(&coordinator),
            Arc::clone(&notifier),
            Arc::clone(&tasks),
            handled_tx,
        ));

        Ok(Tracker {
            local,
            remote,
            clock,
            connectivity,
            coordinator,
            notifier,
            runtime,
            tasks,
            handled,
            watcher,
        })
    }

    pub fn local(&self) -> &LocalStore {
        &self.local
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Check the session, make sure a local record exists, and start a sync
    /// pass when online.
    pub async fn init(&self) -> Result<InitStatus> {
        let online = self.is_online();
        let authenticated = online && self.is_authenticated().await;

        if self.local.load_record()?.is_none() {
            info!("creating initial progress record");
            self.local.save_record(&UserRecord::initial())?;
        }
        if online {
            self.spawn_pass();
        }

        Ok(InitStatus {
            online,
            authenticated,
            user_id: self.local.user_id()?,
        })
    }

    pub fn load_user_data(&self) -> Result<Option<UserRecord>> {
        Ok(self.local.load_record()?)
    }

    /// Apply an exercise update locally and queue it. Returns `false` (and
    /// changes nothing) when there is no record or the exercise is unknown.
    pub fn update_exercise(&self, exercise_id: &str, patch: &ExercisePatch) -> bool {
        self.report_update(self.try_update_exercise(exercise_id, patch))
    }

    pub fn try_update_exercise(&self, exercise_id: &str, patch: &ExercisePatch) -> Result<()> {
        self.mutate(|record, now| record.apply_exercise_patch(exercise_id, patch, now))
    }

    /// Same as [`Tracker::update_exercise`], for a training day.
    pub fn update_training_day(&self, day: u32, patch: &DayPatch) -> bool {
        self.report_update(self.try_update_training_day(day, patch))
    }

    pub fn try_update_training_day(&self, day: u32, patch: &DayPatch) -> Result<()> {
        self.mutate(|record, now| record.apply_day_patch(day, patch, now))
    }

    /// Replace the local name and email. When online and no backend user
    /// exists yet, creates one in the background and then syncs.
    pub fn update_user_profile(&self, name: &str, email: &str) -> bool {
        match self.try_update_user_profile(name, email) {
            Ok(()) => true,
            Err(e) => {
                warn!("profile update rejected: {e}");
                false
            }
        }
    }

    pub fn try_update_user_profile(&self, name: &str, email: &str) -> Result<()> {
        let mut record = self
            .local
            .load_record()?
            .ok_or(parley_core::Error::MissingRecord)?;
        record.set_profile(name, email);
        self.local.save_record(&record)?;

        if self.is_online() && self.local.user_id()?.is_none() {
            let coordinator = Arc::clone(&self.coordinator);
            self.track(self.runtime.spawn(async move {
                match coordinator.ensure_remote_user().await {
                    Ok(_) => {
                        coordinator.run_pass().await;
                    }
                    Err(e) => warn!("could not create backend user: {e}"),
                }
            }));
        }
        Ok(())
    }

    /// Run a sync pass now and wait for it. Returns whether it completed.
    pub async fn sync_with_backend(&self) -> bool {
        self.coordinator.run_pass().await
    }

    /// Fetch the progress report. `None` when offline, signed out, or when
    /// the backend refuses.
    pub async fn generate_report(&self) -> Option<Vec<u8>> {
        if !self.is_online() {
            self.notifier.notify(REPORT_OFFLINE_NOTICE);
            return None;
        }
        let user_id = match self.local.user_id() {
            Ok(Some(id)) => id,
            Ok(None) => {
                debug!("report requested without a user id");
                return None;
            }
            Err(e) => {
                error!("could not read user id: {e}");
                return None;
            }
        };
        match self.remote.fetch_report(user_id).await {
            Ok(bytes) => Some(bytes),
            Err(e) if e.is_network() => {
                info!("report unavailable while the backend is unreachable: {e}");
                None
            }
            Err(e) => {
                warn!("report generation failed: {e}");
                None
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Publish a connectivity change. The reaction (sync pass or offline
    /// notice) runs in the background; [`Tracker::settle`] waits for it.
    pub fn set_online(&self, online: bool) {
        if let Some(status) = self.connectivity.set(NetworkStatus::from_online(online)) {
            debug!(%status, "connectivity changed");
        }
    }

    /// Create an account on the backend and remember its id.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Result<UserSummary> {
        let user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: Some(password.to_string()),
        };
        let created = self.remote.create_user(user).await?;
        self.local.set_user_id(&created.id)?;
        info!(user = %created.id, "registered");
        Ok(created)
    }

    /// Sign in and remember the user id. Starts a sync pass to pull the
    /// account's progress.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<UserSummary> {
        let user = self
            .remote
            .login(email.to_string(), password.to_string())
            .await?;
        self.local.set_user_id(&user.id)?;
        info!(user = %user.id, "logged in");
        self.spawn_pass();
        Ok(user)
    }

    /// Sign out and forget the user id, the local record and the session
    /// credential. Local state is cleared even when the backend call fails;
    /// that failure is still returned.
    pub async fn logout_user(&self) -> Result<()> {
        let remote_result = self.remote.logout().await;

        self.local.clear_user_id()?;
        self.local.clear_record()?;
        self.local.clear_auth_token()?;

        remote_result?;
        Ok(())
    }

    /// Ask the backend whether the session is valid, storing the user id it
    /// reports. Any failure counts as not authenticated.
    pub async fn is_authenticated(&self) -> bool {
        match self.remote.check_session().await {
            Ok(status) if status.authenticated => {
                if let Some(id) = status.user_id {
                    if let Err(e) = self.local.set_user_id(&id) {
                        error!("could not store user id: {e}");
                    }
                }
                true
            }
            Ok(_) => false,
            Err(e) => {
                debug!("session check failed: {e}");
                false
            }
        }
    }

    /// Wait for the reaction to every connectivity change published so far,
    /// then for every background task, including tasks they start in turn.
    pub async fn settle(&self) {
        let target = self.connectivity.transitions();
        let mut handled = self.handled.clone();
        if handled.wait_for(|seen| *seen >= target).await.is_err() {
            debug!("connectivity watcher stopped");
        }

        loop {
            let pending = std::mem::take(&mut *lock_tasks(&self.tasks));
            if pending.is_empty() {
                break;
            }
            for task in pending {
                if let Err(e) = task.await {
                    error!("background sync task failed: {e}");
                }
            }
        }
    }

    fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut UserRecord, &Timestamp) -> parley_core::Result<Operation>,
    {
        let mut record = self
            .local
            .load_record()?
            .ok_or(parley_core::Error::MissingRecord)?;
        let now_ms = self.clock.now_ms();
        let op = apply(&mut record, &Timestamp::from_millis(now_ms))?;

        self.local.save_record(&record)?;
        self.local
            .queue()
            .enqueue(&PendingOperation::new(op, now_ms))?;

        if self.is_online() {
            self.spawn_pass();
        }
        Ok(())
    }

    fn report_update(&self, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e @ Error::Core(_)) => {
                warn!("update rejected: {e}");
                false
            }
            Err(e) => {
                error!("update failed: {e}");
                false
            }
        }
    }

    fn spawn_pass(&self) {
        let coordinator = Arc::clone(&self.coordinator);
        self.track(self.runtime.spawn(async move {
            coordinator.run_pass().await;
        }));
    }

    fn track(&self, task: JoinHandle<()>) {
        track(&self.tasks, task);
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

/// React to connectivity transitions until the publisher goes away.
async fn watch_network(
    mut observer: NetworkObserver,
    coordinator: Arc<SyncCoordinator>,
    notifier: Arc<dyn Notifier>,
    tasks: Arc<Tasks>,
    handled: watch::Sender<u64>,
) {
    while let Some((status, seen)) = observer.changed().await {
        match status {
            NetworkStatus::Online => {
                info!("back online");
                let coordinator = Arc::clone(&coordinator);
                track(
                    &tasks,
                    tokio::spawn(async move {
                        coordinator.run_pass().await;
                    }),
                );
            }
            NetworkStatus::Offline => notifier.notify(OFFLINE_NOTICE),
        }
        handled.send_replace(seen);
    }
}

fn track(tasks: &Tasks, task: JoinHandle<()>) {
    let mut tasks = lock_tasks(tasks);
    tasks.retain(|t| !t.is_finished());
    tasks.push(task);
}

fn lock_tasks(tasks: &Tasks) -> std::sync::MutexGuard<'_, Vec<JoinHandle<()>>> {
    tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
