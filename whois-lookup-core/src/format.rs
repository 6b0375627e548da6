//! Display helpers for record fields.
//!
//! Dates coming from the endpoint are free-form strings; everything here is
//! lenient and never fails, an unparseable value turns into a sentinel text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DAY_MILLIS: u64 = 1000 * 60 * 60 * 24;

/// Column width of the hostnames cell.
pub const HOSTNAMES_MAX_LEN: usize = 25;

/// Shown in place of a day count when either date cannot be parsed.
pub const NAN_DAYS: &str = "NaN Days";

/// Shown in place of a long-form date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a date string sent by the endpoint.
///
/// Accepts RFC 3339, ISO 8601 with a `+hhmm` offset, naive date-times (taken as UTC)
/// and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days between two dates, rounded up, formatted as `"<n> Days"`.
///
/// The order of the arguments does not matter.
pub fn calculate_days_between_dates(start_date: &str, end_date: &str) -> String {
    let (Some(start), Some(end)) = (parse_date(start_date), parse_date(end_date)) else {
        return NAN_DAYS.to_string();
    };

    let diff_millis = (end - start).num_milliseconds().unsigned_abs();
    let diff_days = diff_millis.div_ceil(DAY_MILLIS);
    format!("{diff_days} Days")
}

/// Keep the first `max_len` characters and append `...` when `text` is longer.
pub fn truncate_string(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let mut truncated: String = text.chars().take(max_len).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

/// `"January 1, 2020"` style date, in UTC.
pub fn format_long_date(input: &str) -> String {
    parse_date(input).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format("%B %-d, %Y").to_string(),
    )
}

/// Comma-joined host names, cut to the hostnames column width.
pub fn format_host_names(host_names: &[String]) -> String {
    truncate_string(&host_names.join(", "), HOSTNAMES_MAX_LEN)
}
