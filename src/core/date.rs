//! Calendar helpers: date parsing and weekday counting over date ranges.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parses a calendar date from `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.date());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| DateError::InvalidDate(s.to_string()))
}

/// Parses a full English weekday name. The match is exact and case-sensitive.
pub fn parse_weekday_name(name: &str) -> Result<Weekday, DateError> {
    WEEKDAYS
        .into_iter()
        .find(|day| weekday_name(*day) == name)
        .ok_or_else(|| DateError::UnknownWeekday(name.to_string()))
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Counts the days in `[start, end)` that fall on `weekday` and are on or
/// after `after`.
pub fn count_weekday_occurrences(
    start: NaiveDate,
    end: NaiveDate,
    after: NaiveDate,
    weekday: Weekday,
) -> usize {
    start
        .iter_days()
        .take_while(|day| *day < end)
        .filter(|day| *day >= after && day.weekday() == weekday)
        .count()
}
