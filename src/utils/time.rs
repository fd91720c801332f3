//! Time utilities: unix seconds <-> local wall clock, durations, day bounds.

use crate::errors::{AppError, AppResult};
use chrono::{Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Current time as unix seconds.
pub fn now_secs() -> i64 {
    Local::now().timestamp()
}

/// Format unix seconds in local time with a strftime pattern.
pub fn format_local(secs: i64, fmt: &str) -> String {
    match Local.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.format(fmt).to_string(),
        LocalResult::None => secs.to_string(),
    }
}

/// `h:m:s` without padding, e.g. `1:5:30`.
pub fn hms(seconds: i64) -> String {
    format!(
        "{}:{}:{}",
        seconds.div_euclid(3600),
        seconds.rem_euclid(3600) / 60,
        seconds.rem_euclid(60)
    )
}

/// Parse `YYYY-MM-DD HH:MM[:SS]` (also with a `T` separator) as local time.
pub fn parse_local_datetime(s: &str) -> AppResult<i64> {
    let s = s.trim();
    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    local_secs(naive).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First and last second (inclusive) of a local calendar day.
pub fn local_day_bounds(day: NaiveDate) -> AppResult<(i64, i64)> {
    let first = day
        .and_hms_opt(0, 0, 0)
        .and_then(local_secs)
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
    let next = day
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(local_secs)
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
    Ok((first, next - 1))
}

/// Calendar day of unix seconds in the given timezone.
pub fn day_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> Option<NaiveDate> {
    match tz.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.date_naive()),
        LocalResult::None => None,
    }
}

fn local_secs(naive: NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.timestamp()),
        LocalResult::None => None,
    }
}
