use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Sermon;
use crate::daily::{newest_first, sorted_copy, ListEntry};
use crate::error::ValidationError;

/// `All`, or a single category label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter label against the category set `C`.
    ///
    /// `"All"` (any case) or an empty label means every category. Any other
    /// label must name a member of `C` and is stored in its canonical form.
    pub fn parse<C>(label: &str) -> Result<Self, ValidationError>
    where
        C: FromStr<Err = ValidationError> + fmt::Display,
    {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        let category: C = label.parse()?;
        Ok(CategoryFilter::Only(category.to_string()))
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label.eq_ignore_ascii_case(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(label) => f.write_str(label),
        }
    }
}

/// Records with free text that a listing search looks through.
pub trait Searchable {
    /// Case-insensitive substring match. An empty needle matches.
    fn matches(&self, needle: &str) -> bool;
}

/// Entries matching `needle`, in their existing order.
pub fn search<T: Searchable + Clone>(entries: &[T], needle: &str) -> Vec<T> {
    entries.iter().filter(|e| e.matches(needle)).cloned().collect()
}

/// Entries whose category passes `filter`, in their existing order.
pub fn filter_by_category<T: ListEntry + Clone>(entries: &[T], filter: &CategoryFilter) -> Vec<T> {
    entries
        .iter()
        .filter(|e| filter.accepts(e.category()))
        .cloned()
        .collect()
}

pub fn find_by_id<T: ListEntry>(entries: &[T], id: u32) -> Result<&T, ValidationError> {
    entries
        .iter()
        .find(|e| e.id() == id)
        .ok_or(ValidationError::UnknownEntry { id })
}

/// Category plus free-text search over the sermon library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SermonQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl SermonQuery {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Filter by category, then by search text, then sort newest first.
    pub fn apply(&self, sermons: &[Sermon]) -> Vec<Sermon> {
        let in_category = filter_by_category(sermons, &self.category);
        sorted_copy(&search(&in_category, &self.search), newest_first)
    }
}
