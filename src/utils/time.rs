//! Time utilities: parsing HH:MM, minute-of-day conversions, HH:MM formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse `HH:MM` into a minute-of-day. `24:00` is accepted as end of day.
pub fn parse_minute_of_day(t: &str) -> AppResult<u32> {
    if t.trim() == "24:00" {
        return Ok(24 * 60);
    }
    parse_time(t)
        .map(minute_of_day)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minute-of-day for a wall-clock time; seconds are truncated.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// `600` → `"10:00"`, `1440` → `"24:00"`.
pub fn to_hhmm(m: u32) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

pub fn parse_optional_minute(input: Option<&String>) -> AppResult<Option<u32>> {
    if let Some(s) = input {
        Ok(Some(parse_minute_of_day(s)?))
    } else {
        Ok(None)
    }
}
