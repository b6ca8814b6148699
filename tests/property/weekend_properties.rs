// Property-based tests for weekend calculation and day selection

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use date_range_picker::models::calendar_cursor::CalendarCursor;
use date_range_picker::services::notification::LoggingListener;
use date_range_picker::services::selection::RangePicker;
use date_range_picker::services::weekend::weekend_dates;
use date_range_picker::utils::date::{format_iso, parse_iso};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // Days since 2000-01-01, covering a few decades
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0i64..15_000).prop_map(move |offset| epoch + Duration::days(offset))
}

proptest! {
    /// Property: every reported weekend lies in range, is a Saturday/Sunday,
    /// and the list is strictly ascending
    #[test]
    fn prop_weekends_ascending_in_range_and_weekend(
        a in date_strategy(),
        length in 0i64..400,
    ) {
        let b = a + Duration::days(length);
        let weekends = weekend_dates(a, b);

        let parsed: Vec<NaiveDate> = weekends.iter().map(|s| parse_iso(s).unwrap()).collect();
        for pair in parsed.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for date in &parsed {
            prop_assert!(*date >= a && *date <= b);
            prop_assert!(matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    /// Property: no weekend in range is missed
    #[test]
    fn prop_weekend_count_matches_brute_force(
        a in date_strategy(),
        length in 0i64..400,
    ) {
        let b = a + Duration::days(length);
        let expected = a
            .iter_days()
            .take_while(|d| *d <= b)
            .filter(|d| d.weekday().num_days_from_monday() >= 5)
            .count();
        prop_assert_eq!(weekend_dates(a, b).len(), expected);
    }

    /// Property: a single-day range yields that day only when it is a weekend
    #[test]
    fn prop_single_day_range(d in date_strategy()) {
        let weekends = weekend_dates(d, d);
        if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            prop_assert_eq!(weekends, vec![format_iso(d)]);
        } else {
            prop_assert!(weekends.is_empty());
        }
    }

    /// Property: clicking a weekend day never changes the selection
    #[test]
    fn prop_weekend_click_is_noop(
        clicks in proptest::collection::vec(date_strategy(), 0..6),
        day in date_strategy(),
        weekend_offset in 5i64..=6,
    ) {
        // Saturday (5) or Sunday (6) of the week containing `day`
        let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
        let weekend = monday + Duration::days(weekend_offset);
        prop_assert!(matches!(weekend.weekday(), Weekday::Sat | Weekday::Sun));

        let mut picker = RangePicker::new(weekend, 10, Vec::new(), Box::new(LoggingListener));
        for click in clicks {
            picker.select_day(click);
        }
        let before = *picker.range();
        picker.select_day(weekend);
        prop_assert_eq!(*picker.range(), before);
    }

    /// Property: click-built ranges keep start <= end
    #[test]
    fn prop_clicked_ranges_are_ordered(
        clicks in proptest::collection::vec(date_strategy(), 1..10),
    ) {
        let mut picker = RangePicker::new(clicks[0], 10, Vec::new(), Box::new(LoggingListener));
        for click in clicks {
            picker.select_day(click);
            if let (Some(start), Some(end)) = (picker.range().start_date, picker.range().end_date) {
                prop_assert!(start <= end);
            }
        }
    }

    /// Property: moving forward then back by the same delta returns to the same month
    #[test]
    fn prop_change_month_round_trip(
        month in 0u32..12,
        year in 1900i32..2100,
        delta in -240i32..240,
    ) {
        let mut cursor = CalendarCursor::new(month, year).unwrap();
        cursor.change_month(delta);
        prop_assert!(cursor.month() < 12);
        cursor.change_month(-delta);
        prop_assert_eq!((cursor.month(), cursor.year()), (month, year));
    }
}
