use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Short relative label for a declaration card.
///
/// `Just now`, `12m ago`, `3h ago`, then the plain date in local time once
/// a day has passed. Future timestamps read as `Just now`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    time_ago_in(then, now, &Local)
}

/// [`time_ago`] with the date label rendered in `tz`.
pub fn time_ago_in<Tz>(then: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let minutes = (now - then).num_minutes();
    match minutes {
        m if m < 1 => "Just now".to_string(),
        m if m < 60 => format!("{m}m ago"),
        m if m < 24 * 60 => format!("{}h ago", m / 60),
        _ => then.with_timezone(tz).format("%b %d, %Y").to_string(),
    }
}
