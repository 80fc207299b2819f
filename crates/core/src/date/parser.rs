//! `YYYY-MM-DD` input parsing.
//!
//! The input contract is deliberately narrow: three hyphen-separated numeric
//! fields. A different field count is a format error; fields that do not name
//! a real calendar date (Feb 30, month 13, day 0, day 32) are an invalid-date
//! error. Out-of-range components are rejected, never rolled over into a
//! neighboring month.

use chrono::NaiveDate;
use thiserror::Error;

/// Error type for birth-date parsing. Messages are fixed and user-facing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseDateError {
    /// Input does not split into exactly three hyphen-separated fields.
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidFormat,

    /// Fields are present but do not name a real calendar date.
    #[error("Invalid date. Please enter a valid date.")]
    InvalidDate,
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Pure and idempotent: equal inputs always produce equal results.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    let input = input.trim();

    let fields: Vec<&str> = input.split('-').collect();
    if fields.len() != 3 {
        return Err(ParseDateError::InvalidFormat);
    }

    // A non-numeric field surfaces the same message as a nonexistent date,
    // not the format message.
    let year: i32 = fields[0].parse().map_err(|_| ParseDateError::InvalidDate)?;
    let month: u32 = fields[1].parse().map_err(|_| ParseDateError::InvalidDate)?;
    let day: u32 = fields[2].parse().map_err(|_| ParseDateError::InvalidDate)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseDateError::InvalidDate)
}
