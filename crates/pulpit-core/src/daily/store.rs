//! Snapshot store: the published, sorted copy of a seed list.
//!
//! The store never patches its list. A reset replaces it wholesale with a
//! fresh sorted copy of the seed, and readers only ever see a complete,
//! immutable `Arc<[T]>`.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::entry::{sorted_copy, Comparator};
use super::CalendarDay;
use crate::events::Event;

#[derive(Clone)]
pub struct SnapshotStore<T> {
    compare: Comparator<T>,
    current: Arc<[T]>,
    last_reset_date: CalendarDay,
    reset_count: u64,
}

impl<T: fmt::Debug> fmt::Debug for SnapshotStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotStore")
            .field("current", &self.current)
            .field("last_reset_date", &self.last_reset_date)
            .field("reset_count", &self.reset_count)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> SnapshotStore<T> {
    /// Sort a copy of `seed` and stamp it with `today`.
    pub fn initialize(seed: &[T], compare: Comparator<T>, today: CalendarDay) -> Self {
        Self {
            compare,
            current: Arc::from(sorted_copy(seed, compare)),
            last_reset_date: today,
            reset_count: 0,
        }
    }

    /// Re-derive the list from `seed` if `today` is not the day of the last
    /// reset. At most one reset happens per calendar day.
    pub fn maybe_reset(&mut self, seed: &[T], today: CalendarDay) -> Option<Event> {
        if today == self.last_reset_date {
            debug!(day = %today, "same calendar day, snapshot kept");
            return None;
        }

        let previous_day = self.last_reset_date;
        self.current = Arc::from(sorted_copy(seed, self.compare));
        self.last_reset_date = today;
        self.reset_count += 1;

        info!(
            previous_day = %previous_day,
            day = %today,
            entries = self.current.len(),
            "day rolled over, snapshot re-sorted"
        );

        Some(Event::SnapshotReset {
            previous_day,
            day: today,
            entries: self.current.len(),
            at: Utc::now(),
        })
    }
}

impl<T> SnapshotStore<T> {
    /// Shared handle to the published list. Never triggers a reset.
    pub fn current(&self) -> Arc<[T]> {
        Arc::clone(&self.current)
    }

    pub fn entries(&self) -> &[T] {
        &self.current
    }

    pub fn last_reset_date(&self) -> CalendarDay {
        self.last_reset_date
    }

    /// Resets performed since `initialize`.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::newest_first;
    use crate::daily::ListEntry;
    use chrono::{DateTime, TimeZone};

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u32,
        at: DateTime<Utc>,
    }

    impl ListEntry for Post {
        fn id(&self) -> u32 {
            self.id
        }
        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }
        fn category(&self) -> &str {
            "post"
        }
        fn views(&self) -> u64 {
            0
        }
    }

    fn post(id: u32, hour: u32) -> Post {
        Post {
            id,
            at: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
        }
    }

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    fn ids(store: &SnapshotStore<Post>) -> Vec<u32> {
        store.entries().iter().map(|p| p.id).collect()
    }

    #[test]
    fn initialize_sorts_newest_first() {
        let seed = vec![post(1, 9), post(2, 11), post(3, 10)];
        let store = SnapshotStore::initialize(&seed, newest_first, day("Sun Oct 18 2026"));
        assert_eq!(ids(&store), vec![2, 3, 1]);
        assert_eq!(store.last_reset_date(), day("Sun Oct 18 2026"));
        assert_eq!(store.reset_count(), 0);
    }

    #[test]
    fn same_day_is_a_no_op() {
        let seed = vec![post(1, 9), post(2, 11)];
        let mut store = SnapshotStore::initialize(&seed, newest_first, day("Sun Oct 18 2026"));
        let before = store.current();

        assert!(store.maybe_reset(&seed, day("Sun Oct 18 2026")).is_none());
        assert!(store.maybe_reset(&seed, day("Sun Oct 18 2026")).is_none());
        assert!(Arc::ptr_eq(&before, &store.current()));
        assert_eq!(store.reset_count(), 0);
    }

    #[test]
    fn new_day_replaces_list() {
        let seed = vec![post(1, 9), post(2, 11)];
        let mut store = SnapshotStore::initialize(&seed, newest_first, day("Sun Oct 18 2026"));
        let before = store.current();

        let event = store.maybe_reset(&seed, day("Mon Oct 19 2026"));
        match event {
            Some(Event::SnapshotReset {
                previous_day,
                day: new_day,
                entries,
                ..
            }) => {
                assert_eq!(previous_day, day("Sun Oct 18 2026"));
                assert_eq!(new_day, day("Mon Oct 19 2026"));
                assert_eq!(entries, 2);
            }
            other => panic!("Expected SnapshotReset, got {other:?}"),
        }

        assert!(!Arc::ptr_eq(&before, &store.current()));
        assert_eq!(ids(&store), vec![2, 1]);
        assert_eq!(store.reset_count(), 1);

        // Second call on the new day does nothing.
        assert!(store.maybe_reset(&seed, day("Mon Oct 19 2026")).is_none());
        assert_eq!(store.reset_count(), 1);
    }

    #[test]
    fn reset_picks_up_a_different_seed() {
        let mut store =
            SnapshotStore::initialize(&[post(1, 9)], newest_first, day("Sun Oct 18 2026"));
        store.maybe_reset(&[post(4, 8), post(5, 12)], day("Mon Oct 19 2026"));
        assert_eq!(ids(&store), vec![5, 4]);
    }

    #[test]
    fn readers_keep_their_handle_across_resets() {
        let seed = vec![post(1, 9)];
        let mut store = SnapshotStore::initialize(&seed, newest_first, day("Sun Oct 18 2026"));
        let held = store.current();
        store.maybe_reset(&[], day("Mon Oct 19 2026"));
        assert_eq!(held.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn empty_seed_stays_empty() {
        let mut store: SnapshotStore<Post> =
            SnapshotStore::initialize(&[], newest_first, day("Sun Oct 18 2026"));
        assert!(store.is_empty());
        assert!(store.maybe_reset(&[], day("Mon Oct 19 2026")).is_some());
        assert_eq!(store.len(), 0);
    }
}
