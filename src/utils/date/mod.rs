// Date utility functions
// Formatting and weekday classification shared by the picker and the views

use chrono::{Datelike, NaiveDate, Weekday};

/// Format used for every date handed to the host.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as `YYYY-MM-DD`.
///
/// Works on `NaiveDate`, so the local calendar day is never shifted by a
/// time-zone offset.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month + 1)
    };
    next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}
