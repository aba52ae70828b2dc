//! Time utilities: parsing HH:MM, wall-clock minutes, 12-hour formatting, etc.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

/// Minutes in a day; the exclusive upper bound of every interval.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parse "HH:MM" (or "HH:MM:SS", as returned by the backend) into a NaiveTime.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Parse "HH:MM" into minutes since midnight. "24:00" is the end of the day (1440).
pub fn parse_minutes(t: &str) -> Option<u32> {
    match t.trim() {
        "24:00" | "24:00:00" => Some(MINUTES_PER_DAY),
        other => parse_time(other).map(|time| minute_of_day(&time)),
    }
}

pub fn minute_of_day(time: &NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Minutes since midnight → "HH:MM". 1440 wraps to "00:00".
pub fn minutes_to_hhmm(mins: u32) -> String {
    let m = mins % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Minutes since midnight → "h:MM AM/PM".
pub fn minutes_to_12h(mins: u32) -> String {
    let m = mins % MINUTES_PER_DAY;
    let (hours, minutes) = (m / 60, m % 60);
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let h12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minutes, suffix)
}

/// "HH:MM" → "h:MM AM/PM". Unparseable input is returned untouched.
pub fn to_12h(hhmm: &str) -> String {
    parse_minutes(hhmm)
        .map(minutes_to_12h)
        .unwrap_or_else(|| hhmm.to_string())
}

/// Parse a shift timestamp coming from the backend.
///
/// RFC 3339 values keep the wall clock of their own offset; naive values
/// are accepted with a `T` or a space separator, with or without seconds.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse an ad-hoc "HH:MM-HH:MM" shift given on the command line.
pub fn parse_time_range(s: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidShift(s.to_string()))?;

    let start = parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
    let end = parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

    Ok((start, end))
}
