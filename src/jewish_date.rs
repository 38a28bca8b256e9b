use chrono::{DateTime, Datelike, TimeZone};

use crate::constants::{
    CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE,
    CHALAKIM_PER_MONTH, DayOfWeek, JEWISH_EPOCH, JewishMonth, YearLengthType,
};
use crate::error::ZmanimError;

/// The first Hebrew year starting inside the supported civil range. The
/// calendar arithmetic is only exercised from here forward.
const FIRST_SUPPORTED_YEAR: i32 = 3761;

/// Units accepted by [`JewishDate::forward`] and [`JewishDate::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUnit {
    Day,
    Month,
    Year,
}

/// The time-of-day of a molad: hours into the civil day, minutes, and
/// leftover chalakim (each 3 1/3 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoladData {
    pub hours: i64,
    pub minutes: i64,
    pub chalakim: i64,
}

/// A day on the Hebrew calendar, convertible to and from the proleptic
/// Gregorian calendar through an absolute day number (civil 1 January 1 is
/// day 1). Immutable; the arithmetic methods return new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JewishDate {
    abs_date: i64,
    year: i32,
    month: JewishMonth,
    day: u8,
    gregorian_year: i32,
    gregorian_month: u8,
    gregorian_day: u8,
}

impl JewishDate {
    /// Whether the Hebrew year has 13 months (years 3, 6, 8, 11, 14, 17
    /// and 19 of the Metonic cycle).
    pub fn is_jewish_leap_year(year: i32) -> bool {
        (7 * year + 1) % 19 < 7
    }

    /// The number of months from the molad of creation through the molad
    /// of the given month, times the length of a synodic month, in
    /// chalakim.
    pub(crate) fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
        let month_of_year = Self::month_of_year(year, month) as i32;
        let cycles = (year - 1) / 19;
        let year_in_cycle = (year - 1) % 19;
        let months_elapsed =
            235 * cycles + 12 * year_in_cycle + (7 * year_in_cycle + 1) / 19 + (month_of_year - 1);
        CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed as i64
    }

    /// Converts the Nissan-based month number to a Tishrei-based ordinal
    /// within the year (Tishrei = 1).
    fn month_of_year(year: i32, month: JewishMonth) -> u8 {
        let is_leap = Self::is_jewish_leap_year(year);
        let month: u8 = month.into();
        (month + if is_leap { 6 } else { 5 }) % if is_leap { 13 } else { 12 } + 1
    }

    /// Days from the start of the Hebrew calendar era to Rosh Hashanah of
    /// the given year, after applying the four dechiyos to the molad of
    /// Tishrei.
    pub(crate) fn jewish_calendar_elapsed_days(year: i32) -> i64 {
        let chalakim = Self::chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
        let molad_day = chalakim / CHALAKIM_PER_DAY;
        let molad_parts = chalakim - molad_day * CHALAKIM_PER_DAY;

        let mut rosh_hashana_day = molad_day;
        // Molad zaken (18 hours = 19440 chalakim), GaTaRaD on a Tuesday of
        // a common year, and BeTuTeKaPoT on a Monday after a leap year.
        if molad_parts >= 19440
            || (molad_day % 7 == 2 && molad_parts >= 9924 && !Self::is_jewish_leap_year(year))
            || (molad_day % 7 == 1 && molad_parts >= 16789 && Self::is_jewish_leap_year(year - 1))
        {
            rosh_hashana_day += 1;
        }
        // Lo ADU rosh: never Sunday, Wednesday or Friday.
        if matches!(rosh_hashana_day % 7, 0 | 3 | 5) {
            rosh_hashana_day += 1;
        }
        rosh_hashana_day
    }

    pub fn days_in_jewish_year(year: i32) -> i64 {
        Self::jewish_calendar_elapsed_days(year + 1) - Self::jewish_calendar_elapsed_days(year)
    }

    pub fn is_cheshvan_long(year: i32) -> bool {
        Self::days_in_jewish_year(year) % 10 == 5
    }

    pub fn is_kislev_short(year: i32) -> bool {
        Self::days_in_jewish_year(year) % 10 == 3
    }

    pub fn cheshvan_kislev_kviah(year: i32) -> YearLengthType {
        if Self::is_cheshvan_long(year) && !Self::is_kislev_short(year) {
            YearLengthType::Shelaimim
        } else if !Self::is_cheshvan_long(year) && Self::is_kislev_short(year) {
            YearLengthType::Chaserim
        } else {
            YearLengthType::Kesidran
        }
    }

    pub fn days_in_jewish_month(year: i32, month: JewishMonth) -> u8 {
        match month {
            JewishMonth::Iyar | JewishMonth::Tammuz | JewishMonth::Elul | JewishMonth::Teves => 29,
            JewishMonth::Cheshvan => {
                if Self::is_cheshvan_long(year) {
                    30
                } else {
                    29
                }
            }
            JewishMonth::Kislev => {
                if Self::is_kislev_short(year) {
                    29
                } else {
                    30
                }
            }
            JewishMonth::Adar => {
                if Self::is_jewish_leap_year(year) {
                    30
                } else {
                    29
                }
            }
            JewishMonth::AdarII => 29,
            _ => 30,
        }
    }

    fn last_month_of_jewish_year(year: i32) -> JewishMonth {
        if Self::is_jewish_leap_year(year) {
            JewishMonth::AdarII
        } else {
            JewishMonth::Adar
        }
    }

    /// The months of a Hebrew year in civil order, Tishrei first.
    fn months_in_year_order(year: i32) -> Vec<JewishMonth> {
        let mut months = vec![
            JewishMonth::Tishrei,
            JewishMonth::Cheshvan,
            JewishMonth::Kislev,
            JewishMonth::Teves,
            JewishMonth::Shevat,
            JewishMonth::Adar,
        ];
        if Self::is_jewish_leap_year(year) {
            months.push(JewishMonth::AdarII);
        }
        months.extend([
            JewishMonth::Nissan,
            JewishMonth::Iyar,
            JewishMonth::Sivan,
            JewishMonth::Tammuz,
            JewishMonth::Av,
            JewishMonth::Elul,
        ]);
        months
    }

    /// Days from 1 Tishrei through the given date, inclusive.
    pub(crate) fn days_since_start_of_jewish_year(year: i32, month: JewishMonth, day: u8) -> i64 {
        let mut elapsed = day as i64;
        for m in Self::months_in_year_order(year) {
            if m == month {
                break;
            }
            elapsed += Self::days_in_jewish_month(year, m) as i64;
        }
        elapsed
    }

    fn hebrew_to_abs_date(year: i32, month: JewishMonth, day: u8) -> i64 {
        JEWISH_EPOCH
            + Self::jewish_calendar_elapsed_days(year)
            + Self::days_since_start_of_jewish_year(year, month, day)
    }

    pub(crate) fn last_day_of_gregorian_month(month: u8, year: i32) -> u8 {
        match month {
            2 => {
                if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Absolute day number of a proleptic Gregorian date; 1 January 1 is
    /// day 1.
    pub(crate) fn gregorian_to_abs_date(year: i32, month: u8, day: u8) -> i64 {
        let mut abs_date = day as i64;
        for m in 1..month {
            abs_date += Self::last_day_of_gregorian_month(m, year) as i64;
        }
        let y = (year - 1) as i64;
        abs_date + 365 * y + y / 4 - y / 100 + y / 400
    }

    fn abs_date_to_gregorian(abs_date: i64) -> (i32, u8, u8) {
        let mut year = (abs_date / 366) as i32;
        while abs_date >= Self::gregorian_to_abs_date(year + 1, 1, 1) {
            year += 1;
        }
        let mut month: u8 = 1;
        while abs_date
            > Self::gregorian_to_abs_date(year, month, Self::last_day_of_gregorian_month(month, year))
        {
            month += 1;
        }
        let day = (abs_date - Self::gregorian_to_abs_date(year, month, 1) + 1) as u8;
        (year, month, day)
    }

    fn abs_date_to_hebrew(abs_date: i64) -> (i32, JewishMonth, u8) {
        // Underestimate the year, then walk forward to the year whose Rosh
        // Hashanah is the last one at or before the target.
        let mut year = ((abs_date - JEWISH_EPOCH) / 366) as i32;
        while abs_date >= Self::hebrew_to_abs_date(year + 1, JewishMonth::Tishrei, 1) {
            year += 1;
        }
        let mut remaining = abs_date - Self::hebrew_to_abs_date(year, JewishMonth::Tishrei, 1);
        let mut month = JewishMonth::Tishrei;
        for m in Self::months_in_year_order(year) {
            let len = Self::days_in_jewish_month(year, m) as i64;
            month = m;
            if remaining < len {
                break;
            }
            remaining -= len;
        }
        (year, month, (remaining + 1) as u8)
    }

    fn from_abs_date(abs_date: i64) -> Self {
        let (year, month, day) = Self::abs_date_to_hebrew(abs_date);
        let (gregorian_year, gregorian_month, gregorian_day) = Self::abs_date_to_gregorian(abs_date);
        Self {
            abs_date,
            year,
            month,
            day,
            gregorian_year,
            gregorian_month,
            gregorian_day,
        }
    }

    /// Builds a date from a proleptic Gregorian (year, month 1-12, day).
    pub fn from_gregorian_date(year: i32, month: u8, day: u8) -> Result<Self, ZmanimError> {
        if year < 1 || !(1..=12).contains(&month) {
            return Err(ZmanimError::InvalidCivilDate);
        }
        if day == 0 || day > Self::last_day_of_gregorian_month(month, year) {
            return Err(ZmanimError::InvalidCivilDate);
        }
        Ok(Self::from_abs_date(Self::gregorian_to_abs_date(year, month, day)))
    }

    /// Builds a date from the civil date carried by a `chrono` instant.
    pub fn from_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Result<Self, ZmanimError> {
        Self::from_gregorian_date(
            date_time.year(),
            date_time.month() as u8,
            date_time.day() as u8,
        )
    }

    /// Builds a date from a Hebrew (year, month, day). `AdarII` is only
    /// valid in leap years, and the day must exist in the month.
    pub fn from_jewish_date(year: i32, month: JewishMonth, day: u8) -> Result<Self, ZmanimError> {
        if year < FIRST_SUPPORTED_YEAR {
            return Err(ZmanimError::InvalidHebrewDate);
        }
        if month == JewishMonth::AdarII && !Self::is_jewish_leap_year(year) {
            return Err(ZmanimError::InvalidHebrewDate);
        }
        if day == 0 || day > Self::days_in_jewish_month(year, month) {
            return Err(ZmanimError::InvalidHebrewDate);
        }
        let abs_date = Self::hebrew_to_abs_date(year, month, day);
        let (gregorian_year, gregorian_month, gregorian_day) = Self::abs_date_to_gregorian(abs_date);
        Ok(Self {
            abs_date,
            year,
            month,
            day,
            gregorian_year,
            gregorian_month,
            gregorian_day,
        })
    }

    pub fn abs_date(&self) -> i64 {
        self.abs_date
    }

    pub fn jewish_year(&self) -> i32 {
        self.year
    }

    pub fn jewish_month(&self) -> JewishMonth {
        self.month
    }

    pub fn jewish_day_of_month(&self) -> u8 {
        self.day
    }

    pub fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }

    /// Gregorian month, 1-12.
    pub fn gregorian_month(&self) -> u8 {
        self.gregorian_month
    }

    pub fn gregorian_day_of_month(&self) -> u8 {
        self.gregorian_day
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        let dow = (self.abs_date.rem_euclid(7)) as u8 + 1;
        DayOfWeek::try_from(dow).unwrap_or(DayOfWeek::Sunday)
    }

    pub fn is_leap_year(&self) -> bool {
        Self::is_jewish_leap_year(self.year)
    }

    pub fn days_in_year(&self) -> i64 {
        Self::days_in_jewish_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        Self::days_in_jewish_month(self.year, self.month)
    }

    pub fn kviah(&self) -> YearLengthType {
        Self::cheshvan_kislev_kviah(self.year)
    }

    pub fn days_since_start_of_year(&self) -> i64 {
        Self::days_since_start_of_jewish_year(self.year, self.month, self.day)
    }

    /// The month that follows this date's month, rolling the year forward
    /// from Elul and skipping Adar II in common years.
    fn next_month(year: i32, month: JewishMonth) -> (i32, JewishMonth) {
        match month {
            JewishMonth::Elul => (year + 1, JewishMonth::Tishrei),
            JewishMonth::Adar if !Self::is_jewish_leap_year(year) => (year, JewishMonth::Nissan),
            JewishMonth::Adar => (year, JewishMonth::AdarII),
            JewishMonth::AdarII => (year, JewishMonth::Nissan),
            other => {
                let n: u8 = other.into();
                (year, JewishMonth::try_from(n + 1).unwrap_or(JewishMonth::Tishrei))
            }
        }
    }

    fn previous_month(year: i32, month: JewishMonth) -> (i32, JewishMonth) {
        match month {
            JewishMonth::Tishrei => (year - 1, JewishMonth::Elul),
            JewishMonth::Nissan if Self::is_jewish_leap_year(year) => (year, JewishMonth::AdarII),
            JewishMonth::Nissan => (year, JewishMonth::Adar),
            JewishMonth::AdarII => (year, JewishMonth::Adar),
            other => {
                let n: u8 = other.into();
                (year, JewishMonth::try_from(n - 1).unwrap_or(JewishMonth::Elul))
            }
        }
    }

    /// Moves the date forward by whole days, months or years. Month and
    /// year steps keep the day of month, clamping to the end of a shorter
    /// target month; Adar II collapses into Adar when landing in a common
    /// year.
    pub fn forward(&self, unit: CalendarUnit, amount: i64) -> Result<Self, ZmanimError> {
        if amount < 0 {
            return self.back(unit, -amount);
        }
        match unit {
            CalendarUnit::Day => Ok(Self::from_abs_date(self.abs_date + amount)),
            CalendarUnit::Month => {
                let mut year = self.year;
                let mut month = self.month;
                for _ in 0..amount {
                    (year, month) = Self::next_month(year, month);
                }
                let day = self.day.min(Self::days_in_jewish_month(year, month));
                Self::from_jewish_date(year, month, day)
            }
            CalendarUnit::Year => {
                let year = self.year + amount as i32;
                let month = if self.month == JewishMonth::AdarII && !Self::is_jewish_leap_year(year)
                {
                    JewishMonth::Adar
                } else {
                    self.month
                };
                let day = self.day.min(Self::days_in_jewish_month(year, month));
                Self::from_jewish_date(year, month, day)
            }
        }
    }

    pub fn back(&self, unit: CalendarUnit, amount: i64) -> Result<Self, ZmanimError> {
        if amount < 0 {
            return self.forward(unit, -amount);
        }
        match unit {
            CalendarUnit::Day => Ok(Self::from_abs_date(self.abs_date - amount)),
            CalendarUnit::Month => {
                let mut year = self.year;
                let mut month = self.month;
                for _ in 0..amount {
                    (year, month) = Self::previous_month(year, month);
                }
                let day = self.day.min(Self::days_in_jewish_month(year, month));
                Self::from_jewish_date(year, month, day)
            }
            CalendarUnit::Year => {
                let year = self.year - amount as i32;
                let month = if self.month == JewishMonth::AdarII && !Self::is_jewish_leap_year(year)
                {
                    JewishMonth::Adar
                } else {
                    self.month
                };
                let day = self.day.min(Self::days_in_jewish_month(year, month));
                Self::from_jewish_date(year, month, day)
            }
        }
    }

    pub fn chalakim_since_molad_tohu_of_month(&self) -> i64 {
        Self::chalakim_since_molad_tohu(self.year, self.month)
    }

    /// The mean conjunction of this date's month: the civil day it falls
    /// on and its time of day. The molad day starts at 18:00 the prior
    /// evening, so conjunctions at 6 hours or later roll to the next
    /// civil day and the hour is shifted by 18.
    pub fn molad(&self) -> Result<(JewishDate, MoladData), ZmanimError> {
        let chalakim = self.chalakim_since_molad_tohu_of_month();
        let mut abs_date = JEWISH_EPOCH + chalakim / CHALAKIM_PER_DAY;
        let conjunction_parts = chalakim % CHALAKIM_PER_DAY;

        let mut hours = conjunction_parts / CHALAKIM_PER_HOUR;
        let leftover = conjunction_parts - hours * CHALAKIM_PER_HOUR;
        let minutes = leftover / CHALAKIM_PER_MINUTE;
        let chalakim_remainder = leftover - minutes * CHALAKIM_PER_MINUTE;

        if hours >= 6 {
            abs_date += 1;
        }
        hours = (hours + 18) % 24;

        Ok((
            Self::from_abs_date(abs_date),
            MoladData {
                hours,
                minutes,
                chalakim: chalakim_remainder,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years_in_cycle() {
        // 5771, 5782, 5784 and 5787 are leap; 5770 is not.
        assert!(JewishDate::is_jewish_leap_year(5771));
        assert!(!JewishDate::is_jewish_leap_year(5770));
        assert!(JewishDate::is_jewish_leap_year(5782));
        assert!(JewishDate::is_jewish_leap_year(5784));
        assert!(JewishDate::is_jewish_leap_year(5787));
    }

    #[test]
    fn test_known_conversions() {
        // 1 Tishrei 5783 was 2022-09-26, a Monday.
        let rh = JewishDate::from_jewish_date(5783, JewishMonth::Tishrei, 1).expect("valid");
        assert_eq!(
            (rh.gregorian_year(), rh.gregorian_month(), rh.gregorian_day_of_month()),
            (2022, 9, 26)
        );
        assert_eq!(rh.day_of_week(), DayOfWeek::Monday);

        // 15 Nissan 5782 (first day of Pesach) was 2022-04-16, a Shabbos.
        let pesach = JewishDate::from_jewish_date(5782, JewishMonth::Nissan, 15).expect("valid");
        assert_eq!(
            (pesach.gregorian_year(), pesach.gregorian_month(), pesach.gregorian_day_of_month()),
            (2022, 4, 16)
        );
        assert_eq!(pesach.day_of_week(), DayOfWeek::Shabbos);
    }

    #[test]
    fn test_gregorian_round_trip() {
        let date = JewishDate::from_gregorian_date(2022, 5, 28).expect("valid");
        assert_eq!(date.jewish_year(), 5782);
        assert_eq!(date.jewish_month(), JewishMonth::Iyar);
        assert_eq!(date.jewish_day_of_month(), 27);
        let back = JewishDate::from_jewish_date(5782, JewishMonth::Iyar, 27).expect("valid");
        assert_eq!(
            (back.gregorian_year(), back.gregorian_month(), back.gregorian_day_of_month()),
            (2022, 5, 28)
        );
    }

    #[test]
    fn test_year_lengths_are_legal() {
        for year in 5700..5800 {
            let len = JewishDate::days_in_jewish_year(year);
            if JewishDate::is_jewish_leap_year(year) {
                assert!(matches!(len, 383 | 384 | 385), "year {year} len {len}");
            } else {
                assert!(matches!(len, 353 | 354 | 355), "year {year} len {len}");
            }
        }
    }

    #[test]
    fn test_rosh_hashana_never_sunday_wednesday_friday() {
        for year in 5600..5900 {
            let rh = JewishDate::from_jewish_date(year, JewishMonth::Tishrei, 1).expect("valid");
            assert!(
                !matches!(
                    rh.day_of_week(),
                    DayOfWeek::Sunday | DayOfWeek::Wednesday | DayOfWeek::Friday
                ),
                "year {year} RH on {:?}",
                rh.day_of_week()
            );
        }
    }

    #[test]
    fn test_cheshvan_kislev_follow_kviah() {
        for year in 5700..5800 {
            match JewishDate::cheshvan_kislev_kviah(year) {
                YearLengthType::Shelaimim => {
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Cheshvan), 30);
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Kislev), 30);
                }
                YearLengthType::Kesidran => {
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Cheshvan), 29);
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Kislev), 30);
                }
                YearLengthType::Chaserim => {
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Cheshvan), 29);
                    assert_eq!(JewishDate::days_in_jewish_month(year, JewishMonth::Kislev), 29);
                }
            }
        }
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert_eq!(
            JewishDate::from_jewish_date(3000, JewishMonth::Nissan, 1).unwrap_err(),
            ZmanimError::InvalidHebrewDate
        );
        // 5783 is a common year, so Adar II does not exist.
        assert_eq!(
            JewishDate::from_jewish_date(5783, JewishMonth::AdarII, 1).unwrap_err(),
            ZmanimError::InvalidHebrewDate
        );
        // Iyar has 29 days.
        assert_eq!(
            JewishDate::from_jewish_date(5782, JewishMonth::Iyar, 30).unwrap_err(),
            ZmanimError::InvalidHebrewDate
        );
        assert_eq!(
            JewishDate::from_gregorian_date(2022, 2, 29).unwrap_err(),
            ZmanimError::InvalidCivilDate
        );
        assert_eq!(
            JewishDate::from_gregorian_date(2022, 13, 1).unwrap_err(),
            ZmanimError::InvalidCivilDate
        );
    }

    #[test]
    fn test_forward_back_day_is_identity() {
        let date = JewishDate::from_gregorian_date(2022, 5, 28).expect("valid");
        let round = date
            .forward(CalendarUnit::Day, 1)
            .and_then(|d| d.back(CalendarUnit::Day, 1))
            .expect("valid");
        assert_eq!(date, round);
    }

    #[test]
    fn test_forward_day_crosses_month_and_year() {
        let elul29 = JewishDate::from_jewish_date(5782, JewishMonth::Elul, 29).expect("valid");
        let rh = elul29.forward(CalendarUnit::Day, 1).expect("valid");
        assert_eq!(rh.jewish_year(), 5783);
        assert_eq!(rh.jewish_month(), JewishMonth::Tishrei);
        assert_eq!(rh.jewish_day_of_month(), 1);
    }

    #[test]
    fn test_forward_twelve_months_equals_year_on_common_years() {
        // 5783 and 5784: 5783 is common so 12 months from Tishrei 5783
        // lands in Tishrei 5784.
        let date = JewishDate::from_jewish_date(5783, JewishMonth::Tishrei, 10).expect("valid");
        let by_months = date.forward(CalendarUnit::Month, 12).expect("valid");
        let by_year = date.forward(CalendarUnit::Year, 1).expect("valid");
        assert_eq!(by_months, by_year);

        // 5784 is leap; 12 months falls one month short of a year.
        let leap_date = JewishDate::from_jewish_date(5784, JewishMonth::Tishrei, 10).expect("valid");
        let by_months = leap_date.forward(CalendarUnit::Month, 12).expect("valid");
        let by_year = leap_date.forward(CalendarUnit::Year, 1).expect("valid");
        assert_eq!(by_months.forward(CalendarUnit::Month, 1).expect("valid"), by_year);
    }

    #[test]
    fn test_month_arithmetic_clamps_day() {
        // 30 Shevat forward one month: Adar of 5783 has 29 days.
        let date = JewishDate::from_jewish_date(5783, JewishMonth::Shevat, 30).expect("valid");
        let next = date.forward(CalendarUnit::Month, 1).expect("valid");
        assert_eq!(next.jewish_month(), JewishMonth::Adar);
        assert_eq!(next.jewish_day_of_month(), 29);
    }

    #[test]
    fn test_adar_ii_collapses_on_year_step() {
        // 5784 is leap; 5785 is common.
        let date = JewishDate::from_jewish_date(5784, JewishMonth::AdarII, 10).expect("valid");
        let next = date.forward(CalendarUnit::Year, 1).expect("valid");
        assert_eq!(next.jewish_year(), 5785);
        assert_eq!(next.jewish_month(), JewishMonth::Adar);
    }

    #[test]
    fn test_molad_tishrei_5782() {
        // Molad Tishrei 5782 was Monday night, September 6 2021, at
        // 23:27 and 11 chalakim.
        let date = JewishDate::from_jewish_date(5782, JewishMonth::Tishrei, 1).expect("valid");
        let (molad_date, molad) = date.molad().expect("valid");
        assert_eq!(
            (
                molad_date.gregorian_year(),
                molad_date.gregorian_month(),
                molad_date.gregorian_day_of_month()
            ),
            (2021, 9, 6)
        );
        assert_eq!(molad.hours, 23);
        assert_eq!(molad.minutes, 27);
        assert_eq!(molad.chalakim, 11);
    }
}
