//! Range selection state machine.
//!
//! `RangePicker` owns everything the widget mutates: the selected range, the
//! active predefined shortcut and the calendar cursor. Each operation runs to
//! completion and, when it changes whether a complete range is selected,
//! recomputes the weekends and notifies the listener exactly once.
//!
//! Phases: Empty -> PartialStart -> Complete -> PartialStart ... on day
//! clicks; a predefined pick moves any phase straight to Complete.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::models::calendar_cursor::{year_options, CalendarCursor, CursorError};
use crate::models::date_range::{DateRange, SelectionPhase};
use crate::models::predefined_range::PredefinedRange;
use crate::services::notification::{RangeChange, RangeChangeListener};
use crate::services::weekend::WeekendCalculator;
use crate::utils::date::is_weekend;

pub struct RangePicker {
    range: DateRange,
    active_predefined: Option<i64>,
    predefined_ranges: Vec<PredefinedRange>,
    cursor: CalendarCursor,
    year_options: RangeInclusive<i32>,
    weekends: Vec<String>,
    calculator: WeekendCalculator,
    listener: Box<dyn RangeChangeListener>,
}

impl RangePicker {
    /// Create a picker showing the month of `today`, with nothing selected.
    pub fn new(
        today: NaiveDate,
        year_window: u32,
        predefined_ranges: Vec<PredefinedRange>,
        listener: Box<dyn RangeChangeListener>,
    ) -> Self {
        let cursor = CalendarCursor::from_date(today);
        Self {
            range: DateRange::empty(),
            active_predefined: None,
            predefined_ranges,
            year_options: year_options(cursor.year(), year_window),
            cursor,
            weekends: Vec::new(),
            calculator: WeekendCalculator::new(),
            listener,
        }
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn phase(&self) -> SelectionPhase {
        self.range.phase()
    }

    /// Weekends inside the current range; empty unless the range is complete.
    pub fn weekends(&self) -> &[String] {
        &self.weekends
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    pub fn year_options(&self) -> RangeInclusive<i32> {
        self.year_options.clone()
    }

    pub fn predefined_ranges(&self) -> &[PredefinedRange] {
        &self.predefined_ranges
    }

    pub fn active_predefined(&self) -> Option<i64> {
        self.active_predefined
    }

    pub fn is_predefined_active(&self, range: &PredefinedRange) -> bool {
        range.id.is_some() && range.id == self.active_predefined
    }

    /// Handle a click on `date`. Weekend days are ignored.
    pub fn select_day(&mut self, date: NaiveDate) {
        if is_weekend(date) {
            log::trace!("Ignoring click on weekend day {}", date);
            return;
        }

        let next = match (self.range.start_date, self.range.end_date) {
            (Some(start), None) if date < start => DateRange::complete(date, start),
            (Some(start), None) => DateRange::complete(start, date),
            _ => DateRange::starting_at(date),
        };

        log::debug!("Day {} selected: {:?} -> {:?}", date, self.range.phase(), next.phase());
        self.apply(next);
    }

    /// Handle a click on day number `day` of the displayed month.
    pub fn select_day_in_view(&mut self, day: u32) {
        if let Some(date) = self.cursor.date_of(day) {
            self.select_day(date);
        }
    }

    /// Take the bounds of a predefined shortcut as-is and mark it active.
    pub fn select_predefined(&mut self, range: &PredefinedRange) {
        log::debug!(
            "Predefined range '{}' selected: {} - {}",
            range.label,
            range.start_date,
            range.end_date
        );
        self.active_predefined = range.id;
        self.apply(DateRange::complete(range.start_date, range.end_date));
    }

    /// Pick the shortcut at `index` in the injected list.
    pub fn select_predefined_at(&mut self, index: usize) {
        if let Some(range) = self.predefined_ranges.get(index).cloned() {
            self.select_predefined(&range);
        }
    }

    /// Drop any selection and the active shortcut.
    pub fn clear(&mut self) {
        self.active_predefined = None;
        self.apply(DateRange::empty());
    }

    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.range.contains(date)
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.range.is_endpoint(date)
    }

    pub fn change_month(&mut self, delta: i32) {
        self.cursor.change_month(delta);
    }

    pub fn select_month(&mut self, month: u32) -> Result<(), CursorError> {
        self.cursor.select_month(month)
    }

    pub fn select_year(&mut self, year: i32) -> Result<(), CursorError> {
        self.cursor.select_year(year, &self.year_options)
    }

    /// Store `next` and notify if completeness was affected.
    fn apply(&mut self, next: DateRange) {
        let previous = std::mem::replace(&mut self.range, next);
        if previous == next {
            return;
        }
        if !previous.is_complete() && !next.is_complete() {
            return;
        }

        let change = match next.bounds() {
            Some((start, end)) => {
                self.weekends = self.calculator.weekends(start, end);
                let formatted = next.formatted().unwrap_or_default();
                RangeChange::selected(formatted, self.weekends.clone())
            }
            None => {
                self.weekends.clear();
                RangeChange::cleared()
            }
        };
        self.listener.on_change(&change);
    }
}

impl std::fmt::Debug for RangePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangePicker")
            .field("range", &self.range)
            .field("active_predefined", &self.active_predefined)
            .field("cursor", &self.cursor)
            .field("weekends", &self.weekends)
            .finish_non_exhaustive()
    }
}
