// Test fixtures - reusable test data
// Provides consistent dates, shortcuts and a recording listener

#![allow(dead_code)]

use chrono::NaiveDate;
use date_range_picker::models::predefined_range::PredefinedRange;
use date_range_picker::services::notification::{RangeChange, RangeChangeListener};
use std::cell::RefCell;
use std::rc::Rc;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Monday, March 4 2024
    pub fn monday_mar_4_2024() -> NaiveDate {
        ymd(2024, 3, 4)
    }

    /// Friday, March 15 2024
    pub fn friday_mar_15_2024() -> NaiveDate {
        ymd(2024, 3, 15)
    }

    /// Friday, March 1 2024
    pub fn friday_mar_1_2024() -> NaiveDate {
        ymd(2024, 3, 1)
    }

    /// Saturday, March 9 2024
    pub fn saturday_mar_9_2024() -> NaiveDate {
        ymd(2024, 3, 9)
    }
}

/// Sample shortcuts for testing
pub mod shortcuts {
    use super::*;

    pub fn this_month_march_2024() -> PredefinedRange {
        PredefinedRange::new(
            Some(141),
            "This month",
            dates::ymd(2024, 3, 1),
            dates::ymd(2024, 3, 31),
        )
    }

    pub fn last_7_days() -> PredefinedRange {
        PredefinedRange::new(
            Some(121),
            "Last 7 days",
            dates::ymd(2024, 3, 13),
            dates::ymd(2024, 3, 20),
        )
    }

    /// Bounds supplied in the wrong order
    pub fn inverted() -> PredefinedRange {
        PredefinedRange::new(Some(999), "Inverted", dates::ymd(2024, 3, 15), dates::ymd(2024, 3, 4))
    }
}

/// Listener that keeps every change it receives.
#[derive(Clone, Default)]
pub struct Recorder {
    changes: Rc<RefCell<Vec<RangeChange>>>,
}

impl Recorder {
    pub fn listener(&self) -> Box<dyn RangeChangeListener> {
        let changes = Rc::clone(&self.changes);
        Box::new(move |change: &RangeChange| changes.borrow_mut().push(change.clone()))
    }

    pub fn changes(&self) -> Vec<RangeChange> {
        self.changes.borrow().clone()
    }

    pub fn last(&self) -> Option<RangeChange> {
        self.changes.borrow().last().cloned()
    }
}
