//! Calendar date helpers for the event board.
//!
//! Event dates are stored as `YYYY-MM-DD` strings and compared by equality, so every
//! date entering the system is checked against that format first.

use chrono::{Local, NaiveDate};

use crate::server::error::event::EventError;

/// Storage and query format of event dates
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the server's local timezone, formatted as `YYYY-MM-DD`
pub fn today_local() -> String {
    Local::now().date_naive().format(EVENT_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` event date.
///
/// # Returns
/// - `Ok(NaiveDate)` - The parsed calendar day
/// - `Err(EventError::InvalidDate)` - The value is not a valid `YYYY-MM-DD` date
pub fn parse_event_date(date: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(date, EVENT_DATE_FORMAT)
        .map_err(|_| EventError::InvalidDate(date.to_string()))
}

/// Checks a date string is a canonical `YYYY-MM-DD` value.
///
/// Non-padded values such as `2026-1-5` parse but would never match a stored date, so
/// they are rejected too.
pub fn validate_event_date(date: &str) -> Result<(), EventError> {
    let parsed = parse_event_date(date)?;

    if parsed.format(EVENT_DATE_FORMAT).to_string() != date {
        return Err(EventError::InvalidDate(date.to_string()));
    }

    Ok(())
}
