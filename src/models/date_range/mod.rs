//! Date range model.
//!
//! A `DateRange` is the (possibly incomplete) selection held by the picker.
//! Ranges built by day clicks always keep `start_date <= end_date`; ranges
//! taken from a predefined shortcut are stored exactly as supplied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::format_iso;

/// Where the selection currently sits in the click-to-range state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing selected yet
    Empty,
    /// A start date is set, waiting for the second click
    PartialStart,
    /// Both endpoints are set
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single-day selection waiting for its end date.
    pub fn starting_at(date: NaiveDate) -> Self {
        Self {
            start_date: Some(date),
            end_date: None,
        }
    }

    pub fn complete(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start_date, self.end_date) {
            (Some(_), Some(_)) => SelectionPhase::Complete,
            (Some(_), None) => SelectionPhase::PartialStart,
            _ => SelectionPhase::Empty,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == SelectionPhase::Complete
    }

    /// Both endpoints, when the range is complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// True for the single selected day of a partial range, or for any day
    /// inside a complete range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), None) => date == start,
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start_date == Some(date) || self.end_date == Some(date)
    }

    /// Bounds formatted as `YYYY-MM-DD`, when the range is complete.
    pub fn formatted(&self) -> Option<[String; 2]> {
        self.bounds()
            .map(|(start, end)| [format_iso(start), format_iso(end)])
    }
}
