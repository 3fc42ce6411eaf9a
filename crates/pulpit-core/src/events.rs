use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::daily::CalendarDay;

/// Every state change in a daily view produces an Event.
/// The CLI prints them; the scheduler logs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A store was built from its seed for the first time.
    SnapshotInitialized {
        day: CalendarDay,
        entries: usize,
        at: DateTime<Utc>,
    },
    /// The calendar day moved and the store was re-derived from its seed.
    SnapshotReset {
        previous_day: CalendarDay,
        day: CalendarDay,
        entries: usize,
        at: DateTime<Utc>,
    },
    SchedulerStarted {
        interval_secs: u64,
        at: DateTime<Utc>,
    },
    SchedulerStopped {
        ticks: u64,
        resets: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::SnapshotInitialized { at, .. }
            | Event::SnapshotReset { at, .. }
            | Event::SchedulerStarted { at, .. }
            | Event::SchedulerStopped { at, .. } => *at,
        }
    }
}
