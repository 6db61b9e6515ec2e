//! # Time Utilities
//!
//! The backend exchanges calendar dates as `YYYY-MM-DD` text (`sdate`, `edate`,
//! `rdate`). These helpers build and check those strings with chrono.

use chrono::{Datelike, Local, NaiveDate};

const YMD: &str = "%Y-%m-%d";

/// Today's local date as `YYYY-MM-DD`.
pub fn today_ymd() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_ymd(date: NaiveDate) -> String {
    date.format(YMD).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_ymd(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), YMD)
        .map_err(|_| Error::FailToDateParse(value.to_string()))
}

/// First day of the month containing `date`, through `date` itself.
pub fn month_to_date(date: NaiveDate) -> (String, String) {
    let start = date.with_day(1).unwrap_or(date);
    (format_ymd(start), format_ymd(date))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
