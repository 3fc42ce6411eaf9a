//! # Pulpit Core Library
//!
//! This library provides the core logic behind the Pulpit ministry media
//! site: the daily-reset views over sermon and declaration lists, the
//! catalog of sample content, and the shared configuration. The `pulpit`
//! CLI is a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Daily view**: a wall-clock-driven snapshot of a seed list, sorted
//!   newest first and re-derived whenever the calendar day rolls over. The
//!   caller either invokes `tick()` itself or hands the view to the async
//!   [`ResetScheduler`].
//! - **Catalog**: sermon and prophetic declaration records, fixtures,
//!   category/search queries and aggregated statistics.
//! - **Config**: TOML-based application configuration.
//!
//! ## Key Components
//!
//! - [`DailyView`]: seed + snapshot store + clock
//! - [`SnapshotStore`]: the published sorted list and its reset date
//! - [`ResetScheduler`]: periodic driver with explicit teardown
//! - [`ListEntry`]: trait implemented by every orderable record

pub mod catalog;
pub mod config;
pub mod daily;
pub mod error;
pub mod events;

pub use catalog::{
    CatalogStats, CategoryFilter, DeclarationCategory, ListingStats, PropheticDeclaration,
    Sermon, SermonCategory, SermonQuery,
};
pub use config::Config;
pub use daily::{
    newest_first, sorted_copy, CalendarDay, Clock, Comparator, DailyView, ListEntry,
    ManualClock, ResetScheduler, SchedulerHandle, Snapshot, SnapshotReader, SnapshotStore,
    SystemClock,
};
pub use error::{ConfigError, ValidationError};
pub use events::Event;
