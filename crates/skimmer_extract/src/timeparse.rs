use chrono::{DateTime, Duration, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FIRST_INT: Regex = Regex::new(r"\d+").unwrap();
}

/// Calendar formats tried before handing off to `dateparser`, so date-only
/// strings stay pinned to UTC midnight.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
];

/// Turn free-form publication text into an absolute timestamp. Relative
/// phrases ("2 hours ago") are anchored to `now`; empty or unrecognizable
/// input yields `None` so the caller can apply its own default.
pub fn normalize_time(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();

    // Unit checks run hours-first so "1 hour 30 minutes ago" rounds to hours.
    if lower.contains("hour") || lower.contains("hr") {
        return Some(rewind(now, Duration::hours(first_int(&lower, 1)), Duration::hours(1)));
    }
    if lower.contains("minute") || lower.contains("min") {
        return Some(rewind(now, Duration::minutes(first_int(&lower, 30)), Duration::minutes(30)));
    }
    if lower.contains("day") {
        return Some(rewind(now, Duration::days(first_int(&lower, 1)), Duration::days(1)));
    }

    parse_absolute(trimmed)
}

// Parsed as u32 so the Duration constructors stay in range; text without a
// usable integer falls back to the unit default.
fn first_int(text: &str, default: i64) -> i64 {
    FIRST_INT
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(i64::from)
        .unwrap_or(default)
}

/// Checked `now - amount`. Scraped magnitudes can pass the integer parse yet
/// leave the representable timestamp range, where chrono's bare subtraction
/// panics; such values fall back to the unit default, then to `now`.
fn rewind(now: DateTime<Utc>, amount: Duration, default: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(amount)
        .or_else(|| now.checked_sub_signed(default))
        .unwrap_or(now)
}

fn parse_absolute(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(midnight, Utc));
        }
    }
    dateparser::parse(text).ok()
}
