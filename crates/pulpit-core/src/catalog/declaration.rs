use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Searchable;
use crate::daily::ListEntry;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationCategory {
    #[serde(rename = "Prophetic Declaration")]
    PropheticDeclaration,
    #[serde(rename = "Word of Knowledge")]
    WordOfKnowledge,
    #[serde(rename = "Prophetic Word")]
    PropheticWord,
    #[serde(rename = "Prophetic Alert")]
    PropheticAlert,
}

impl DeclarationCategory {
    pub const ALL: [DeclarationCategory; 4] = [
        DeclarationCategory::PropheticDeclaration,
        DeclarationCategory::PropheticWord,
        DeclarationCategory::WordOfKnowledge,
        DeclarationCategory::PropheticAlert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeclarationCategory::PropheticDeclaration => "Prophetic Declaration",
            DeclarationCategory::WordOfKnowledge => "Word of Knowledge",
            DeclarationCategory::PropheticWord => "Prophetic Word",
            DeclarationCategory::PropheticAlert => "Prophetic Alert",
        }
    }
}

impl fmt::Display for DeclarationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeclarationCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory {
                label: s.to_string(),
            })
    }
}

/// A short word published during the day. These are the entries the
/// daily view re-sorts at midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropheticDeclaration {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub category: DeclarationCategory,
    pub views: u64,
}

impl ListEntry for PropheticDeclaration {
    fn id(&self) -> u32 {
        self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn category(&self) -> &str {
        self.category.label()
    }

    fn views(&self) -> u64 {
        self.views
    }
}

impl Searchable for PropheticDeclaration {
    /// Title or content.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}
