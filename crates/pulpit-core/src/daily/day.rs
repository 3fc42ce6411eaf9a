use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// `Sun Oct 18 2026`, the same shape browsers produce for `toDateString()`.
const DAY_FORMAT: &str = "%a %b %d %Y";

/// A date with no time of day. Two instants on the same local calendar day
/// map to equal values; this is what detects a midnight rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Calendar day of `at` in its own time zone.
    pub fn of<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self(at.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidCalendarDay {
                value: s.to_string(),
            })
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
