use proptest::prelude::*;

use crate::constants::{DayOfWeek, JewishMonth};
use crate::jewish_date::{CalendarUnit, JewishDate};

proptest! {
    /// Civil -> Hebrew -> civil is the identity across the supported
    /// civil range.
    #[test]
    fn prop_civil_round_trip(
        year in 1900i32..=2200,
        month in 1u8..=12,
        day in 1u8..=31,
    ) {
        prop_assume!(day <= JewishDate::last_day_of_gregorian_month(month, year));
        let date = JewishDate::from_gregorian_date(year, month, day).expect("valid civil date");
        let back = JewishDate::from_jewish_date(
            date.jewish_year(),
            date.jewish_month(),
            date.jewish_day_of_month(),
        )
        .expect("valid hebrew date");
        prop_assert_eq!(
            (back.gregorian_year(), back.gregorian_month(), back.gregorian_day_of_month()),
            (year, month, day)
        );
    }

    /// Hebrew -> civil -> Hebrew is the identity.
    #[test]
    fn prop_hebrew_round_trip(
        year in 5600i32..=5900,
        month_num in 1u8..=13,
        day in 1u8..=30,
    ) {
        let month = JewishMonth::try_from(month_num).expect("in range");
        prop_assume!(month != JewishMonth::AdarII || JewishDate::is_jewish_leap_year(year));
        prop_assume!(day <= JewishDate::days_in_jewish_month(year, month));
        let date = JewishDate::from_jewish_date(year, month, day).expect("valid hebrew date");
        let back = JewishDate::from_gregorian_date(
            date.gregorian_year(),
            date.gregorian_month(),
            date.gregorian_day_of_month(),
        )
        .expect("valid civil date");
        prop_assert_eq!(
            (back.jewish_year(), back.jewish_month(), back.jewish_day_of_month()),
            (year, month, day)
        );
    }

    /// Year lengths only take the six legal values, matching leap status.
    #[test]
    fn prop_year_lengths(year in 3761i32..=9999) {
        let len = JewishDate::days_in_jewish_year(year);
        if JewishDate::is_jewish_leap_year(year) {
            prop_assert!(matches!(len, 383 | 384 | 385), "leap year {} has length {}", year, len);
        } else {
            prop_assert!(matches!(len, 353 | 354 | 355), "common year {} has length {}", year, len);
        }
    }

    /// Lo ADU rosh across the full supported year range.
    #[test]
    fn prop_rosh_hashana_weekday(year in 3761i32..=9999) {
        let rh = JewishDate::from_jewish_date(year, JewishMonth::Tishrei, 1).expect("valid");
        prop_assert!(!matches!(
            rh.day_of_week(),
            DayOfWeek::Sunday | DayOfWeek::Wednesday | DayOfWeek::Friday
        ));
    }

    /// A day forward then a day back lands on the same date.
    #[test]
    fn prop_day_forward_back(
        year in 1900i32..=2200,
        month in 1u8..=12,
        day in 1u8..=28,
    ) {
        let date = JewishDate::from_gregorian_date(year, month, day).expect("valid");
        let round = date
            .forward(CalendarUnit::Day, 1)
            .and_then(|d| d.back(CalendarUnit::Day, 1))
            .expect("valid");
        prop_assert_eq!(date, round);
    }

    /// Day-of-week advances by one per day.
    #[test]
    fn prop_day_of_week_steps(
        year in 1900i32..=2200,
        month in 1u8..=12,
        day in 1u8..=28,
    ) {
        let date = JewishDate::from_gregorian_date(year, month, day).expect("valid");
        let next = date.forward(CalendarUnit::Day, 1).expect("valid");
        let expected = (date.day_of_week() as u8 % 7) + 1;
        prop_assert_eq!(next.day_of_week() as u8, expected);
    }
}

#[test]
fn test_twelve_months_vs_year_on_common_and_leap() {
    // 5770 is common: 12 months == 1 year.
    let common = JewishDate::from_jewish_date(5770, JewishMonth::Tishrei, 5).expect("valid");
    assert_eq!(
        common.forward(CalendarUnit::Month, 12).expect("valid"),
        common.forward(CalendarUnit::Year, 1).expect("valid"),
    );
    // 5771 is leap: 12 months falls a month short.
    let leap = JewishDate::from_jewish_date(5771, JewishMonth::Tishrei, 5).expect("valid");
    let by_months = leap.forward(CalendarUnit::Month, 12).expect("valid");
    let by_year = leap.forward(CalendarUnit::Year, 1).expect("valid");
    assert_eq!(by_months.forward(CalendarUnit::Month, 1).expect("valid"), by_year);
}
