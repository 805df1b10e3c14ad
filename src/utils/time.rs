//! Time utilities: parsing clock times, formatting signed durations.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

/// Strict HH:MM:SS, the on-disk format of the record store.
pub fn parse_time_strict(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// User input is more forgiving: HH:MM:SS, HH:MM or bare HH.
pub fn parse_time_flexible(t: &str) -> Option<NaiveTime> {
    for fmt in ["%H:%M:%S", "%H:%M", "%H"] {
        if let Ok(parsed) = NaiveTime::parse_from_str(t, fmt) {
            return Some(parsed);
        }
    }
    None
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time_flexible(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Signed H:MM:SS rendering of a duration. Never wraps: a record whose
/// went precedes its came shows a leading minus instead of masking the
/// state.
pub fn format_signed_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let s = total.abs();
    format!("{}{}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
