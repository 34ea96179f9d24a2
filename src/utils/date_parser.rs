//! Date parsing and formatting compatible with JavaScript `Date` output.
//!
//! Clients of the timestamp and exercise services expect the textual forms
//! produced by `Date.prototype.toUTCString()` and `toDateString()`, and
//! timestamps limited to the JavaScript `Date` range. All times are UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Largest absolute millisecond offset representable by a JavaScript `Date`.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Invalid Date")]
    Invalid,
}

/// Parses a date given either as epoch milliseconds or as a date string.
///
/// Accepted forms, tried in order:
///
/// 1. An optionally signed run of digits: milliseconds since the Unix epoch
/// 2. `YYYY-MM-DD`: midnight UTC of that day
/// 3. `YYYY-MM-DDTHH:MM:SS[.fff]` without offset: taken as UTC
/// 4. RFC 3339 (`2015-12-25T10:00:00+02:00`)
/// 5. RFC 2822 (`Fri, 25 Dec 2015 00:00:00 GMT`)
///
/// # Errors
///
/// Returns [`DateParseError::Invalid`] for anything else, and for values
/// outside the JavaScript `Date` range.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateParseError::Invalid);
    }

    if is_integer(input) {
        let millis: i64 = input.parse().map_err(|_| DateParseError::Invalid)?;
        return from_millis(millis);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return check_range(date.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return check_range(naive.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return check_range(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return check_range(dt.with_timezone(&Utc));
    }

    Err(DateParseError::Invalid)
}

/// Converts epoch milliseconds into a UTC date-time.
///
/// # Errors
///
/// Returns [`DateParseError::Invalid`] outside the JavaScript `Date` range.
pub fn from_millis(millis: i64) -> Result<DateTime<Utc>, DateParseError> {
    if millis.unsigned_abs() > MAX_TIMESTAMP_MILLIS.unsigned_abs() {
        return Err(DateParseError::Invalid);
    }

    DateTime::from_timestamp_millis(millis).ok_or(DateParseError::Invalid)
}

fn check_range(dt: DateTime<Utc>) -> Result<DateTime<Utc>, DateParseError> {
    from_millis(dt.timestamp_millis())
}

fn is_integer(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Formats like `Date.prototype.toUTCString()`: `Thu, 01 Jan 1970 00:00:00 GMT`.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Formats like `Date.prototype.toDateString()`: `Thu Jan 01 1970`.
pub fn format_date_string(dt: &DateTime<Utc>) -> String {
    dt.format("%a %b %d %Y").to_string()
}

/// Midnight at the start of the day containing `dt`.
pub fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Last millisecond (23:59:59.999) of the day containing `dt`.
pub fn end_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    dt.date_naive().and_time(last).and_utc()
}

/// Parses the leading integer of a string the way `parseInt(s, 10)` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit is found or the value overflows.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
