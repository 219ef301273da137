//! Reminder polling loop.
//!
//! At every tick the loop reloads the tasks file and takes a snapshot of the
//! table. It then samples the local clock once as `HH:MM` plus today's weekday
//! and notifies every task that is due. A task is due when its start time equals the sampled time exactly and
//! either its day is today or it repeats (daily or weekly). Weekly tasks therefore
//! fire on every day their time matches, not only on their own day.
//!
//! The loop keeps no state between ticks. Two ticks landing in the same minute
//! notify the same tasks twice.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytask::libs::config::ReminderConfig;
//! use daytask::libs::notifier::DesktopNotifier;
//! use daytask::libs::reminder::ReminderService;
//! use daytask::store::TaskStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = Arc::new(TaskStore::open("tasks.xlsx"));
//! let handle = ReminderService::new(store, Arc::new(DesktopNotifier), ReminderConfig::default()).spawn();
//! // ...
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ReminderConfig;
use crate::libs::messages::Message;
use crate::libs::notifier::{Notification, Notifier};
use crate::libs::task::{Column, Repeat, Task, Weekday};
use crate::store::TaskStore;
use chrono::{Datelike, Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// One sample of the wall clock, at the precision tasks are scheduled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Time of day as `HH:MM`.
    pub time: String,
    pub day: Weekday,
}

impl Tick {
    pub fn new(time: impl Into<String>, day: Weekday) -> Self {
        Self { time: time.into(), day }
    }

    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self {
            time: now.format("%H:%M").to_string(),
            day: Weekday::from_chrono(now.weekday()),
        }
    }

    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }
}

pub fn is_due(task: &Task, tick: &Tick) -> bool {
    if task.start_time != tick.time {
        return false;
    }
    task.day == Some(tick.day) || matches!(task.repeat, Some(Repeat::Daily) | Some(Repeat::Weekly))
}

pub fn due_tasks<'a>(tasks: &'a [Task], tick: &'a Tick) -> impl Iterator<Item = &'a Task> + 'a {
    tasks.iter().filter(move |task| is_due(task, tick))
}

/// Builds the notification shown for a due task.
pub fn compose(task: &Task, timeout: Duration) -> Notification {
    Notification {
        title: Message::ReminderTitle(task.title.clone()).to_string(),
        body: Message::ReminderBody {
            day: task.field(Column::Day).to_string(),
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
            description: task.description.clone(),
        }
        .to_string(),
        timeout,
    }
}

pub struct ReminderService {
    store: Arc<TaskStore>,
    notifier: Arc<dyn Notifier>,
    config: ReminderConfig,
}

impl ReminderService {
    pub fn new(store: Arc<TaskStore>, notifier: Arc<dyn Notifier>, config: ReminderConfig) -> Self {
        Self { store, notifier, config }
    }

    /// Notifies every task due at `tick` and returns how many were notified.
    ///
    /// The tasks file is read again first, so changes made by other processes
    /// are picked up on the next tick.
    pub fn check(&self, tick: &Tick) -> usize {
        self.store.reload();
        let tasks = self.store.get_all();
        let mut notified = 0;
        for task in due_tasks(&tasks, tick) {
            let notification = compose(task, self.config.notification_timeout());
            if let Err(e) = self.notifier.notify(&notification) {
                warn!(task_id = %task.id, error = %e, "Failed to deliver reminder");
            }
            notified += 1;
        }
        debug!(time = %tick.time, day = %tick.day, checked = tasks.len(), notified, "Reminder tick");
        notified
    }

    /// Starts polling in a background task. The first check runs immediately.
    pub fn spawn(self) -> ReminderHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            self.run(shutdown_rx).await;
        });
        ReminderHandle { shutdown_tx, handle }
    }

    async fn run(self, mut shutdown: oneshot::Receiver<()>) {
        let period = self.config.interval();
        info!("Starting reminder service with interval {:?}", period);

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check(&Tick::now());
                }
                _ = &mut shutdown => {
                    info!("Reminder service shutting down");
                    break;
                }
            }
        }
    }
}

/// Handle to a running [`ReminderService`].
pub struct ReminderHandle {
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ReminderHandle {
    /// Signals the loop to stop and waits for it to finish.
    pub async fn stop(self) -> Result<(), JoinError> {
        let _ = self.shutdown_tx.send(());
        self.handle.await
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
