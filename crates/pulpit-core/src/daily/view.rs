//! Daily view implementation.
//!
//! The view is a wall-clock-driven state holder. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically,
//! or for handing the view to a [`ResetScheduler`](super::ResetScheduler).
//!
//! ## Usage
//!
//! ```ignore
//! let mut view = DailyView::new(seed, newest_first, SystemClock);
//! // In a loop:
//! view.tick(); // Returns Some(Event::SnapshotReset) after midnight
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::entry::Comparator;
use super::{CalendarDay, Clock, SnapshotStore};
use crate::events::Event;

/// What a reader sees: the published list and the day it was derived on.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<T> {
    pub entries: Arc<[T]>,
    pub last_reset_date: CalendarDay,
}

/// Seed list, snapshot store and clock in one owned value.
#[derive(Debug)]
pub struct DailyView<T, C> {
    seed: Vec<T>,
    store: SnapshotStore<T>,
    clock: C,
}

impl<T: Clone, C: Clock> DailyView<T, C> {
    /// Sort the seed immediately and stamp it with the clock's current day.
    pub fn new(seed: Vec<T>, compare: Comparator<T>, clock: C) -> Self {
        let today = clock.today();
        let store = SnapshotStore::initialize(&seed, compare, today);
        info!(day = %today, entries = store.len(), "daily view initialized");
        Self { seed, store, clock }
    }

    /// The event describing the initial sort, for callers that report it.
    pub fn initialized_event(&self) -> Event {
        Event::SnapshotInitialized {
            day: self.store.last_reset_date(),
            entries: self.store.len(),
            at: Utc::now(),
        }
    }

    /// Call periodically. Returns `Some(Event::SnapshotReset)` when the
    /// calendar day has moved since the last reset.
    pub fn tick(&mut self) -> Option<Event> {
        let today = self.clock.today();
        self.store.maybe_reset(&self.seed, today)
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            entries: self.store.current(),
            last_reset_date: self.store.last_reset_date(),
        }
    }
}

impl<T, C> DailyView<T, C> {
    pub fn store(&self) -> &SnapshotStore<T> {
        &self.store
    }

    pub fn seed(&self) -> &[T] {
        &self.seed
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::{newest_first, ListEntry, ManualClock};
    use chrono::{DateTime, Duration, FixedOffset, TimeZone};

    #[derive(Debug, Clone)]
    struct Note {
        id: u32,
        at: DateTime<Utc>,
    }

    impl ListEntry for Note {
        fn id(&self) -> u32 {
            self.id
        }
        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }
        fn category(&self) -> &str {
            "note"
        }
        fn views(&self) -> u64 {
            1
        }
    }

    fn clock_at(hour: u32, minute: u32) -> ManualClock {
        let tz = FixedOffset::east_opt(0).unwrap();
        ManualClock::new(tz.with_ymd_and_hms(2026, 10, 18, hour, minute, 0).unwrap())
    }

    fn note(id: u32, hour: u32) -> Note {
        Note {
            id,
            at: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn new_sorts_and_stamps_today() {
        let view = DailyView::new(vec![note(1, 9), note(2, 11)], newest_first, clock_at(12, 0));
        let snap = view.snapshot();
        assert_eq!(snap.last_reset_date.to_string(), "Sun Oct 18 2026");
        assert_eq!(snap.entries[0].id, 2);
        assert!(matches!(
            view.initialized_event(),
            Event::SnapshotInitialized { entries: 2, .. }
        ));
    }

    #[test]
    fn snapshot_serializes_entries_and_day() {
        #[derive(Debug, Clone, serde::Serialize)]
        struct Row {
            id: u32,
        }
        fn unordered(_: &Row, _: &Row) -> std::cmp::Ordering {
            std::cmp::Ordering::Equal
        }
        let view = DailyView::new(vec![Row { id: 3 }], unordered, clock_at(8, 0));
        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["last_reset_date"], "Sun Oct 18 2026");
        assert_eq!(json["entries"][0]["id"], 3);
    }

    #[test]
    fn tick_resets_only_after_midnight() {
        let clock = clock_at(23, 58);
        let mut view = DailyView::new(vec![note(1, 9)], newest_first, clock.clone());

        assert!(view.tick().is_none());
        clock.advance(Duration::minutes(1));
        assert!(view.tick().is_none());

        clock.advance(Duration::minutes(2));
        assert!(matches!(view.tick(), Some(Event::SnapshotReset { .. })));
        assert_eq!(view.store().last_reset_date().to_string(), "Mon Oct 19 2026");
        assert!(view.tick().is_none());
    }

    #[test]
    fn seed_is_kept_in_original_order() {
        let clock = clock_at(23, 59);
        let mut view = DailyView::new(vec![note(1, 9), note(2, 11)], newest_first, clock.clone());
        clock.advance(Duration::hours(1));
        view.tick();
        let seed_ids: Vec<u32> = view.seed().iter().map(|n| n.id).collect();
        assert_eq!(seed_ids, vec![1, 2]);
    }
}
