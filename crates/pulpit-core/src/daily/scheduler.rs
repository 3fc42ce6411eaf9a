//! Async driver for a [`DailyView`].
//!
//! The scheduler moves the view into a single tokio task that polls the
//! wall clock on a fixed interval. The first poll happens immediately, so
//! a process started just after midnight is corrected without waiting a
//! full interval. Each reset is published on a `watch` channel; readers
//! clone the latest [`Snapshot`] and never wait on the task.
//!
//! Dropping the [`SchedulerHandle`] aborts the task, so a view that is
//! mounted and unmounted repeatedly never leaves orphaned timers behind.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::view::{DailyView, Snapshot};
use super::{CalendarDay, Clock};
use crate::config::SchedulerConfig;
use crate::error::ValidationError;
use crate::events::Event;

const MIN_INTERVAL: Duration = Duration::from_secs(1);
const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetScheduler {
    interval: Duration,
}

impl Default for ResetScheduler {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}

impl ResetScheduler {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    /// Poll every `interval`. Must be at least a second and at most a day,
    /// otherwise a rollover could go unnoticed for more than one day.
    pub fn new(interval: Duration) -> Result<Self, ValidationError> {
        if interval < MIN_INTERVAL || interval > MAX_INTERVAL {
            let millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
            return Err(ValidationError::InvalidInterval { millis });
        }
        Ok(Self { interval })
    }

    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ValidationError> {
        Self::new(Duration::from_secs(config.poll_interval_secs))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start polling. Must be called from within a tokio runtime.
    pub fn spawn<T, C>(&self, mut view: DailyView<T, C>) -> (SchedulerHandle, SnapshotReader<T>)
    where
        T: Clone + Send + Sync + 'static,
        C: Clock + 'static,
    {
        let (snapshot_tx, snapshot_rx) = watch::channel(view.snapshot());
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let period = self.interval;

        let started = Event::SchedulerStarted {
            interval_secs: period.as_secs(),
            at: Utc::now(),
        };

        let task = tokio::spawn(async move {
            info!(interval_secs = period.as_secs(), "reset scheduler started");
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut ticks = 0u64;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        ticks += 1;
                        if view.tick().is_some() {
                            snapshot_tx.send_replace(view.snapshot());
                        }
                    }
                }
            }

            let resets = view.store().reset_count();
            info!(ticks, resets, "reset scheduler stopped");
            Event::SchedulerStopped {
                ticks,
                resets,
                at: Utc::now(),
            }
        });

        let handle = SchedulerHandle {
            started,
            stop_tx: Some(stop_tx),
            task: Some(task),
        };
        (handle, SnapshotReader { rx: snapshot_rx })
    }
}

/// Owns the running scheduler task.
#[derive(Debug)]
pub struct SchedulerHandle {
    started: Event,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Event>>,
}

impl SchedulerHandle {
    pub fn started_event(&self) -> &Event {
        &self.started
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Tear the timer down and wait for the task to finish.
    ///
    /// Returns `Event::SchedulerStopped`, or `None` if the task had already
    /// died.
    pub async fn stop(mut self) -> Option<Event> {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let task = self.task.take()?;
        match task.await {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(error = %e, "reset scheduler task failed");
                None
            }
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("scheduler handle dropped, aborting task");
            task.abort();
        }
    }
}

/// Read side of a running scheduler.
#[derive(Debug, Clone)]
pub struct SnapshotReader<T> {
    rx: watch::Receiver<Snapshot<T>>,
}

impl<T: Clone> SnapshotReader<T> {
    /// Latest published snapshot.
    pub fn latest(&self) -> Snapshot<T> {
        self.rx.borrow().clone()
    }

    pub fn last_reset_date(&self) -> CalendarDay {
        self.rx.borrow().last_reset_date
    }

    /// Wait for the next reset. Returns `false` once the scheduler is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
