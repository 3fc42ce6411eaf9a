//! Daily-reset views.
//!
//! A view derives a published list from an immutable seed: the seed is
//! copied, sorted with a comparator, and re-derived whenever the wall-clock
//! calendar day changes.
//!
//! ```text
//! seed --sorted_copy--> SnapshotStore <--tick-- DailyView <--interval-- ResetScheduler
//! ```

mod clock;
mod day;
mod entry;
mod scheduler;
mod store;
mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use day::CalendarDay;
pub use entry::{newest_first, sorted_copy, Comparator, ListEntry};
pub use scheduler::{ResetScheduler, SchedulerHandle, SnapshotReader};
pub use store::SnapshotStore;
pub use view::{DailyView, Snapshot};
