//! Calendar date keys.
//!
//! The dashboard exchanges dates as `YYYY-MM-DD` strings. Parsing operates
//! on the calendar-date portion only: a trailing time or offset component is
//! split off and discarded, never interpreted, so a key resolves to the same
//! calendar date regardless of the host machine's timezone.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Parse a `YYYY-MM-DD` key into a calendar date.
///
/// Anything from the first `T` or space onward is dropped before parsing,
/// so timestamps like `2024-06-03T00:00:00Z` resolve to their date portion.
/// Returns [`AnalyticsError::MalformedDate`] when the remaining text is not
/// a zero-padded `YYYY-MM-DD` date.
pub fn parse_key(raw: &str) -> AnalyticsResult<NaiveDate> {
    let date_part = match raw.find(['T', ' ']) {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    let mut segments = date_part.split('-');
    let (year, month, day) = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => return Err(AnalyticsError::malformed_date(raw)),
    };

    let year = parse_segment(year, 4).ok_or_else(|| AnalyticsError::malformed_date(raw))?;
    let month = parse_segment(month, 2).ok_or_else(|| AnalyticsError::malformed_date(raw))?;
    let day = parse_segment(day, 2).ok_or_else(|| AnalyticsError::malformed_date(raw))?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| AnalyticsError::malformed_date(raw))
}

/// Format a calendar date as its canonical `YYYY-MM-DD` key.
pub fn to_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The Sunday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// The first day of the given date's month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

fn parse_segment(text: &str, width: usize) -> Option<u32> {
    if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
