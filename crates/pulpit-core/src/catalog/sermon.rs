use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Searchable;
use crate::daily::ListEntry;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SermonCategory {
    Faith,
    Purpose,
    Healing,
    Prayer,
    Prosperity,
    Evangelism,
    #[serde(rename = "Spiritual Warfare")]
    SpiritualWarfare,
    Love,
}

impl SermonCategory {
    pub const ALL: [SermonCategory; 8] = [
        SermonCategory::Faith,
        SermonCategory::Purpose,
        SermonCategory::Healing,
        SermonCategory::Prayer,
        SermonCategory::Prosperity,
        SermonCategory::Evangelism,
        SermonCategory::SpiritualWarfare,
        SermonCategory::Love,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SermonCategory::Faith => "Faith",
            SermonCategory::Purpose => "Purpose",
            SermonCategory::Healing => "Healing",
            SermonCategory::Prayer => "Prayer",
            SermonCategory::Prosperity => "Prosperity",
            SermonCategory::Evangelism => "Evangelism",
            SermonCategory::SpiritualWarfare => "Spiritual Warfare",
            SermonCategory::Love => "Love",
        }
    }
}

impl fmt::Display for SermonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SermonCategory {
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

/// A recorded sermon, available as video and audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    /// Running time as `MM:SS`.
    pub duration: String,
    pub thumbnail: String,
    pub video_url: String,
    pub audio_url: String,
    pub category: SermonCategory,
    pub views: u64,
}

impl Sermon {
    /// Parsed running time.
    pub fn duration(&self) -> Result<Duration, ValidationError> {
        parse_duration(&self.duration)
    }
}

impl Searchable for Sermon {
    /// Title or description.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

impl ListEntry for Sermon {
    fn id(&self) -> u32 {
        self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }

    fn category(&self) -> &str {
        self.category.label()
    }

    fn views(&self) -> u64 {
        self.views
    }
}

/// `"45:30"` -> 45 minutes 30 seconds.
fn parse_duration(value: &str) -> Result<Duration, ValidationError> {
    let invalid = || ValidationError::InvalidDuration {
        value: value.to_string(),
    };
    let (minutes, seconds) = value.trim().split_once(':').ok_or_else(invalid)?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
    if minutes < 0 || !(0..60).contains(&seconds) {
        return Err(invalid());
    }
    Ok(Duration::minutes(minutes) + Duration::seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in SermonCategory::ALL {
            assert_eq!(category.label().parse::<SermonCategory>().unwrap(), category);
        }
        assert_eq!(
            "spiritual warfare".parse::<SermonCategory>().unwrap(),
            SermonCategory::SpiritualWarfare
        );
        assert!("Worship".parse::<SermonCategory>().is_err());
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&SermonCategory::SpiritualWarfare).unwrap();
        assert_eq!(json, "\"Spiritual Warfare\"");
    }

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("45:30").unwrap(), Duration::seconds(45 * 60 + 30));
        assert_eq!(parse_duration("0:05").unwrap(), Duration::seconds(5));
        assert!(parse_duration("45").is_err());
        assert!(parse_duration("45:75").is_err());
        assert!(parse_duration("ab:cd").is_err());
    }
}
