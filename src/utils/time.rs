use chrono::{ DateTime, NaiveDate, NaiveDateTime, Utc };
use std::error::Error;
use std::fmt;

/// Naive layouts accepted after RFC 3339 and RFC 2822, all read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Divisors that walk seconds up to years
const UNIT_STEPS: [f64; 6] = [60.0, 60.0, 24.0, 7.0, 365.0 / 7.0 / 12.0, 12.0];
const UNIT_NAMES: [&str; 7] = ["second", "minute", "hour", "day", "week", "month", "year"];

#[derive(Debug, Clone, PartialEq)]
pub enum TimeError {
    Unparsable(String),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeError::Unparsable(raw) => write!(f, "Not a valid date: {:?}", raw),
        }
    }
}

impl Error for TimeError {}

/// Parse a date-like string into an instant.
///
/// Returns `None` for anything that doesn't name a real point in time, which
/// callers treat the same as a missing value.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formats an instant relative to `now` as a human-friendly phrase
/// Examples: "just now", "2 minutes ago", "1 hour ago", "in 3 days"
pub fn format_relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = now.signed_duration_since(instant).num_milliseconds();
    let in_future = delta_ms < 0;
    let mut diff = (delta_ms.unsigned_abs() as f64) / 1000.0;

    let mut unit = 0;
    while unit < UNIT_STEPS.len() && diff >= UNIT_STEPS[unit] {
        diff /= UNIT_STEPS[unit];
        unit += 1;
    }
    let count = diff.floor() as u64;

    if unit == 0 && count <= 9 {
        return if in_future { "right now".to_string() } else { "just now".to_string() };
    }

    let name = UNIT_NAMES[unit];
    let phrase = if count == 1 { format!("1 {}", name) } else { format!("{} {}s", count, name) };

    if in_future { format!("in {}", phrase) } else { format!("{} ago", phrase) }
}

/// Humanize a raw timestamp string against `now`
pub fn humanize(raw: &str, now: DateTime<Utc>) -> Result<String, TimeError> {
    let instant = parse_instant(raw).ok_or_else(|| TimeError::Unparsable(raw.to_string()))?;
    Ok(format_relative_time(instant, now))
}
