//! Opening-hours evaluation.
//!
//! A day's hours are published as either the literal `"Closed"` marker or
//! a `"HH:MM-HH:MM"` range in 24-hour time, with whitespace tolerated
//! around the hyphen and the colon components. Instants are compared in a
//! packed `hour * 100 + minute` encoding (so 09:30 packs to 930, not 570);
//! both endpoints and the probe must use the same encoding.
//!
//! Unparsable ranges FAIL OPEN: the provider is treated as open rather
//! than filtered out. Ranges with `close < open` (overnight) get no
//! special handling, so the inclusive comparison never matches them.

use std::collections::HashMap;

use chrono::{NaiveTime, Timelike, Weekday};

/// The literal marker a directory uses for a closed day.
pub const CLOSED_MARKER: &str = "Closed";

/// Whether hours published for one day cover the given instant.
///
/// `None` means the directory published nothing for the day, which reads
/// as closed.
pub fn is_open_at(day_hours: Option<&str>, at: NaiveTime) -> bool {
    let Some(hours) = day_hours else {
        return false;
    };
    if hours == CLOSED_MARKER {
        return false;
    }

    let Some((open, close)) = parse_range(hours) else {
        // Fail open: unparsable hours read as available
        return true;
    };

    let now = pack(at.hour(), at.minute());
    open <= now && now <= close
}

/// The lowercase weekday key used by provider open-hours maps.
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// One row of the weekly hours panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub key: &'static str,
    pub label: &'static str,
    pub hours: String,
    pub is_today: bool,
}

/// The provider's week at a glance, Monday first.
///
/// Days without a published entry show the closed marker.
pub fn week_overview(open_hours: &HashMap<String, String>, today: Weekday) -> Vec<DayHours> {
    const WEEK: [(Weekday, &str); 7] = [
        (Weekday::Mon, "Monday"),
        (Weekday::Tue, "Tuesday"),
        (Weekday::Wed, "Wednesday"),
        (Weekday::Thu, "Thursday"),
        (Weekday::Fri, "Friday"),
        (Weekday::Sat, "Saturday"),
        (Weekday::Sun, "Sunday"),
    ];

    WEEK.iter()
        .map(|&(weekday, label)| {
            let key = weekday_key(weekday);
            DayHours {
                key,
                label,
                hours: open_hours
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| CLOSED_MARKER.to_string()),
                is_today: weekday == today,
            }
        })
        .collect()
}

/// Parse `"HH:MM-HH:MM"` into packed open/close endpoints.
fn parse_range(hours: &str) -> Option<(u32, u32)> {
    let mut sides = hours.split('-');
    let open = parse_endpoint(sides.next()?)?;
    let close = parse_endpoint(sides.next()?)?;
    Some((open, close))
}

/// Parse one `"HH:MM"` endpoint into the packed encoding.
fn parse_endpoint(endpoint: &str) -> Option<u32> {
    let mut parts = endpoint.trim().split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    Some(pack(hour, minute))
}

fn pack(hour: u32, minute: u32) -> u32 {
    hour * 100 + minute
}
