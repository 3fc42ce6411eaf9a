//! Sermon and prophetic declaration catalog.
//!
//! Record types, their fixed category sets, the built-in sample content,
//! and the listing helpers the presentation layer needs (category filter,
//! search, totals, relative time labels).

mod declaration;
pub mod fixtures;
mod query;
mod sermon;
mod stats;
mod time_ago;

pub use declaration::{DeclarationCategory, PropheticDeclaration};
pub use query::{filter_by_category, find_by_id, search, CategoryFilter, Searchable, SermonQuery};
pub use sermon::{Sermon, SermonCategory};
pub use stats::{CatalogStats, ListingStats};
pub use time_ago::{time_ago, time_ago_in};
