use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// A record that can be ordered and grouped by the daily views.
///
/// Display fields (titles, body text, media links) are never inspected by
/// the ordering or reset logic.
pub trait ListEntry {
    fn id(&self) -> u32;

    /// Point in time used for ordering.
    fn timestamp(&self) -> DateTime<Utc>;

    fn category(&self) -> &str;

    fn views(&self) -> u64;
}

/// Ordering function supplied to a [`SnapshotStore`](super::SnapshotStore).
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Most recent first.
pub fn newest_first<T: ListEntry>(a: &T, b: &T) -> Ordering {
    b.timestamp().cmp(&a.timestamp())
}

/// Clone `seed` and sort the copy.
///
/// The sort is stable: entries that compare equal keep their seed order,
/// so repeated sorts of the same seed always agree.
pub fn sorted_copy<T: Clone>(seed: &[T], compare: Comparator<T>) -> Vec<T> {
    let mut copy = seed.to_vec();
    copy.sort_by(compare);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        at: DateTime<Utc>,
    }

    impl ListEntry for Item {
        fn id(&self) -> u32 {
            self.id
        }
        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }
        fn category(&self) -> &str {
            "test"
        }
        fn views(&self) -> u64 {
            0
        }
    }

    fn item(id: u32, hour: u32) -> Item {
        Item {
            id,
            at: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn newest_first_orders_descending() {
        let early = item(1, 9);
        let late = item(2, 11);
        assert_eq!(newest_first(&late, &early), Ordering::Less);
        assert_eq!(newest_first(&early, &late), Ordering::Greater);
        assert_eq!(newest_first(&early, &early), Ordering::Equal);
    }

    #[test]
    fn sorted_copy_leaves_seed_alone() {
        let seed = vec![item(1, 9), item(2, 11), item(3, 10)];
        let sorted = sorted_copy(&seed, newest_first);
        let ids: Vec<u32> = sorted.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[2].id, 3);
    }

    #[test]
    fn equal_timestamps_keep_seed_order() {
        let seed = vec![item(7, 10), item(8, 10), item(9, 12)];
        let first = sorted_copy(&seed, newest_first);
        let second = sorted_copy(&seed, newest_first);
        assert_eq!(first, second);
        let ids: Vec<u32> = first.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9, 7, 8]);
    }
}
