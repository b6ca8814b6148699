//! Weekend dates inside a selected range.

use chrono::NaiveDate;

use crate::utils::date::{format_iso, is_weekend};

/// Every Saturday and Sunday in `[start, end]`, ascending, as `YYYY-MM-DD`.
///
/// Walks the range one day at a time. An inverted range yields nothing.
pub fn weekend_dates(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut weekends = Vec::new();
    let mut current = start;
    while current <= end {
        if is_weekend(current) {
            weekends.push(format_iso(current));
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    weekends
}

/// Memoizes the most recent `weekend_dates` result by range bounds.
#[derive(Debug, Default)]
pub struct WeekendCalculator {
    last: Option<((NaiveDate, NaiveDate), Vec<String>)>,
}

impl WeekendCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weekends(&mut self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        if let Some((bounds, cached)) = &self.last {
            if *bounds == (start, end) {
                return cached.clone();
            }
        }
        let weekends = weekend_dates(start, end);
        self.last = Some(((start, end), weekends.clone()));
        weekends
    }
}
