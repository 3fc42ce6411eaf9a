use std::collections::HashSet;

use chrono::Duration;
use serde::{Serialize, Serializer};

use super::Sermon;
use crate::daily::ListEntry;
use crate::error::ValidationError;

/// Totals shown above any listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingStats {
    pub count: usize,
    pub total_views: u64,
    /// Distinct category labels among the entries.
    pub categories: usize,
}

impl ListingStats {
    pub fn from_entries<T: ListEntry>(entries: &[T]) -> Self {
        let categories: HashSet<&str> = entries.iter().map(|e| e.category()).collect();
        Self {
            count: entries.len(),
            total_views: entries.iter().map(|e| e.views()).sum(),
            categories: categories.len(),
        }
    }
}

/// Listing totals plus the running time of a sermon listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    #[serde(flatten)]
    pub listing: ListingStats,
    #[serde(serialize_with = "serialize_minutes", rename = "total_content_minutes")]
    pub total_content: Duration,
}

impl CatalogStats {
    /// Fails on the first sermon whose duration is not `MM:SS`.
    pub fn from_entries(sermons: &[Sermon]) -> Result<Self, ValidationError> {
        let mut total_content = Duration::zero();
        for sermon in sermons {
            total_content += sermon.duration()?;
        }
        Ok(Self {
            listing: ListingStats::from_entries(sermons),
            total_content,
        })
    }

    /// Total running time rounded to whole hours.
    pub fn total_content_hours(&self) -> i64 {
        (self.total_content.num_seconds() + 1800) / 3600
    }
}

fn serialize_minutes<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn totals_over_fixture_library() {
        let stats = CatalogStats::from_entries(&fixtures::sermons()).unwrap();
        assert_eq!(stats.listing.count, 8);
        assert_eq!(stats.listing.total_views, 8725);
        assert_eq!(stats.listing.categories, 8);
        // 45:30 + 52:15 + 38:45 + 41:20 + 47:10 + 43:55 + 49:25 + 44:18
        assert_eq!(stats.total_content.num_seconds(), 21_758);
        assert_eq!(stats.total_content_hours(), 6);
    }

    #[test]
    fn declarations_count_distinct_categories() {
        let words = fixtures::prophetic_declarations(chrono::Utc::now());
        let stats = ListingStats::from_entries(&words);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.total_views, 7900);
        // Two declarations share "Prophetic Declaration".
        assert_eq!(stats.categories, 4);

        let two = ListingStats::from_entries(&words[..3]);
        assert_eq!(two.categories, 2);
    }

    #[test]
    fn empty_listing_is_zero() {
        let stats = CatalogStats::from_entries(&[]).unwrap();
        assert_eq!(stats.listing, ListingStats { count: 0, total_views: 0, categories: 0 });
        assert_eq!(stats.total_content_hours(), 0);
    }

    #[test]
    fn serializes_flat() {
        let stats = CatalogStats::from_entries(&fixtures::sermons()[..1]).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["categories"], 1);
        assert_eq!(json["total_content_minutes"], 45);
    }

    #[test]
    fn bad_duration_is_reported() {
        let mut library = fixtures::sermons();
        library[2].duration = "soon".into();
        assert!(matches!(
            CatalogStats::from_entries(&library),
            Err(ValidationError::InvalidDuration { .. })
        ));
    }
}
