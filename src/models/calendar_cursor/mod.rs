//! Calendar cursor: which month grid is on screen.
//!
//! Months are zero-based (0 = January) to match the month dropdown's option
//! values. The cursor is independent of the selected range.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::utils::date::days_in_month;

/// Years offered either side of the current year by default.
pub const DEFAULT_YEAR_WINDOW: u32 = 10;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("month {0} is outside 0-11")]
    MonthOutOfRange(u32),
    #[error("year {year} is outside the selectable window {min}-{max}")]
    YearOutOfWindow { year: i32, min: i32, max: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    month: u32,
    year: i32,
}

impl CalendarCursor {
    /// Cursor showing the month that contains `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn new(month: u32, year: i32) -> Result<Self, CursorError> {
        if month > 11 {
            return Err(CursorError::MonthOutOfRange(month));
        }
        Ok(Self { month, year })
    }

    /// Zero-based month (0 = January).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Move by `delta` months, rolling the year over at either end.
    ///
    /// A move that would leave the `i32` year range is ignored.
    pub fn change_month(&mut self, delta: i32) {
        let total = i64::from(self.year) * 12 + i64::from(self.month) + i64::from(delta);
        match i32::try_from(total.div_euclid(12)) {
            Ok(year) => {
                self.year = year;
                self.month = total.rem_euclid(12) as u32;
            }
            Err(_) => log::warn!("Ignoring month change by {} from year {}", delta, self.year),
        }
    }

    /// Replace the month outright (dropdown selection).
    pub fn select_month(&mut self, month: u32) -> Result<(), CursorError> {
        if month > 11 {
            return Err(CursorError::MonthOutOfRange(month));
        }
        self.month = month;
        Ok(())
    }

    /// Replace the year outright, as long as it is one of the offered options.
    pub fn select_year(
        &mut self,
        year: i32,
        options: &RangeInclusive<i32>,
    ) -> Result<(), CursorError> {
        if !options.contains(&year) {
            return Err(CursorError::YearOutOfWindow {
                year,
                min: *options.start(),
                max: *options.end(),
            });
        }
        self.year = year;
        Ok(())
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month + 1)
    }

    /// Date of `day` in the displayed month, if such a day exists.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    /// Number of empty cells before the 1st in a Sunday-first grid.
    pub fn leading_blank_days(&self) -> u32 {
        self.date_of(1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Every day of the displayed month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(move |day| self.date_of(day))
    }
}

/// Name of a zero-based month; out-of-range values clamp to December.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month.min(11) as usize]
}

/// Years offered by the year dropdown: `current_year - window ..= current_year + window`.
pub fn year_options(current_year: i32, window: u32) -> RangeInclusive<i32> {
    let window = i32::try_from(window).unwrap_or(i32::MAX);
    current_year.saturating_sub(window)..=current_year.saturating_add(window)
}
