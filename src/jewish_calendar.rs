use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use crate::constants::{
    BAVLI_CYCLE_START_MILLIS, BAVLI_SHEKALIM_CHANGE_MILLIS, BavliTractate, DayOfWeek,
    JewishHoliday, JewishMonth, Parsha, YERUSHALMI_CYCLE_DAYS, YERUSHALMI_CYCLE_START_MILLIS,
    YerushalmiTractate,
};
use crate::daf::{
    BLATT_PER_BAVLI_TRACTATE, BLATT_PER_YERUSHALMI_TRACTATE, BavliDaf, SHEKALIM_BLATT_BEFORE_CYCLE_8,
    YerushalmiDaf, bavli_page_offset,
};
use crate::error::ZmanimError;
use crate::jewish_date::{CalendarUnit, JewishDate};
use crate::noaa_calculator::julian_day;
use crate::parshas::parsha_for_week;

/// A Hebrew date plus the communal context that decides what the day *is*:
/// inside or outside Israel, inside a walled city (for Purim), and whether
/// the modern Israeli holidays are observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JewishCalendar {
    jewish_date: JewishDate,
    in_israel: bool,
    is_mukaf_choma: bool,
    use_modern_holidays: bool,
}

impl JewishCalendar {
    pub fn new(jewish_date: JewishDate, in_israel: bool) -> Self {
        Self {
            jewish_date,
            in_israel,
            is_mukaf_choma: false,
            use_modern_holidays: true,
        }
    }

    pub fn from_gregorian_date(
        year: i32,
        month: u8,
        day: u8,
        in_israel: bool,
    ) -> Result<Self, ZmanimError> {
        Ok(Self::new(JewishDate::from_gregorian_date(year, month, day)?, in_israel))
    }

    pub fn from_jewish_date(
        year: i32,
        month: JewishMonth,
        day: u8,
        in_israel: bool,
    ) -> Result<Self, ZmanimError> {
        Ok(Self::new(JewishDate::from_jewish_date(year, month, day)?, in_israel))
    }

    pub fn with_mukaf_choma(mut self, is_mukaf_choma: bool) -> Self {
        self.is_mukaf_choma = is_mukaf_choma;
        self
    }

    pub fn with_modern_holidays(mut self, use_modern_holidays: bool) -> Self {
        self.use_modern_holidays = use_modern_holidays;
        self
    }

    pub fn jewish_date(&self) -> &JewishDate {
        &self.jewish_date
    }

    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    pub fn is_mukaf_choma(&self) -> bool {
        self.is_mukaf_choma
    }

    pub fn use_modern_holidays(&self) -> bool {
        self.use_modern_holidays
    }

    fn tomorrow(&self) -> Result<Self, ZmanimError> {
        Ok(Self {
            jewish_date: self.jewish_date.forward(CalendarUnit::Day, 1)?,
            ..*self
        })
    }

    /// Identifies the holiday, fast or notable day, if any. Fast-day
    /// postponements and the modern-holiday weekday shifts are folded in
    /// here, so e.g. 17 Tammuz on a Shabbos maps to the 18th instead.
    pub fn yom_tov_index(&self) -> Option<JewishHoliday> {
        let day = self.jewish_date.jewish_day_of_month();
        let day_of_week = self.jewish_date.day_of_week();
        let month = self.jewish_date.jewish_month();

        match month {
            JewishMonth::Nissan => {
                if day == 14 {
                    return Some(JewishHoliday::ErevPesach);
                }
                if day == 15 || day == 21 || (!self.in_israel && (day == 16 || day == 22)) {
                    return Some(JewishHoliday::Pesach);
                }
                if (17..=20).contains(&day) || day == 16 {
                    return Some(JewishHoliday::CholHamoedPesach);
                }
                if day == 22 || (day == 23 && !self.in_israel) {
                    return Some(JewishHoliday::IsruChag);
                }
                if self.use_modern_holidays
                    && ((day == 26 && day_of_week == DayOfWeek::Thursday)
                        || (day == 28 && day_of_week == DayOfWeek::Monday)
                        || (day == 27
                            && day_of_week != DayOfWeek::Sunday
                            && day_of_week != DayOfWeek::Friday))
                {
                    return Some(JewishHoliday::YomHaShoah);
                }
            }
            JewishMonth::Iyar => {
                if self.use_modern_holidays {
                    // Nidche to Wednesday when 5 Iyar is Friday or Shabbos,
                    // and deferred to Tuesday/Wednesday when it is a Monday.
                    if (day == 4 && day_of_week == DayOfWeek::Tuesday)
                        || ((day == 3 || day == 2) && day_of_week == DayOfWeek::Wednesday)
                        || (day == 5 && day_of_week == DayOfWeek::Monday)
                    {
                        return Some(JewishHoliday::YomHazikaron);
                    }
                    if (day == 5 && day_of_week == DayOfWeek::Wednesday)
                        || ((day == 4 || day == 3) && day_of_week == DayOfWeek::Thursday)
                        || (day == 6 && day_of_week == DayOfWeek::Tuesday)
                    {
                        return Some(JewishHoliday::YomHaatzmaut);
                    }
                }
                if day == 14 {
                    return Some(JewishHoliday::PesachSheni);
                }
                if day == 18 {
                    return Some(JewishHoliday::LagBaomer);
                }
                if self.use_modern_holidays && day == 28 {
                    return Some(JewishHoliday::YomYerushalayim);
                }
            }
            JewishMonth::Sivan => {
                if day == 5 {
                    return Some(JewishHoliday::ErevShavuos);
                }
                if day == 6 || (day == 7 && !self.in_israel) {
                    return Some(JewishHoliday::Shavuos);
                }
                if (day == 7 && self.in_israel) || (day == 8 && !self.in_israel) {
                    return Some(JewishHoliday::IsruChag);
                }
            }
            JewishMonth::Tammuz => {
                if (day == 17 && day_of_week != DayOfWeek::Shabbos)
                    || (day == 18 && day_of_week == DayOfWeek::Sunday)
                {
                    return Some(JewishHoliday::SeventeenthOfTammuz);
                }
            }
            JewishMonth::Av => {
                if (day == 9 && day_of_week != DayOfWeek::Shabbos)
                    || (day == 10 && day_of_week == DayOfWeek::Sunday)
                {
                    return Some(JewishHoliday::TishaBeav);
                }
                if day == 15 {
                    return Some(JewishHoliday::TuBeav);
                }
            }
            JewishMonth::Elul => {
                if day == 29 {
                    return Some(JewishHoliday::ErevRoshHashana);
                }
            }
            JewishMonth::Tishrei => {
                if day == 1 || day == 2 {
                    return Some(JewishHoliday::RoshHashana);
                }
                if (day == 3 && day_of_week != DayOfWeek::Shabbos)
                    || (day == 4 && day_of_week == DayOfWeek::Sunday)
                {
                    return Some(JewishHoliday::FastOfGedalyah);
                }
                if day == 9 {
                    return Some(JewishHoliday::ErevYomKippur);
                }
                if day == 10 {
                    return Some(JewishHoliday::YomKippur);
                }
                if day == 14 {
                    return Some(JewishHoliday::ErevSuccos);
                }
                if day == 15 || (day == 16 && !self.in_israel) {
                    return Some(JewishHoliday::Succos);
                }
                if (16..=20).contains(&day) {
                    return Some(JewishHoliday::CholHamoedSuccos);
                }
                if day == 21 {
                    return Some(JewishHoliday::HoshanaRabbah);
                }
                if day == 22 {
                    return Some(JewishHoliday::SheminiAtzeres);
                }
                if day == 23 && !self.in_israel {
                    return Some(JewishHoliday::SimchasTorah);
                }
                if (day == 24 && !self.in_israel) || (day == 23 && self.in_israel) {
                    return Some(JewishHoliday::IsruChag);
                }
            }
            JewishMonth::Cheshvan => {}
            JewishMonth::Kislev => {
                if day >= 25 {
                    return Some(JewishHoliday::Chanukah);
                }
            }
            JewishMonth::Teves => {
                if day == 1
                    || day == 2
                    || (day == 3 && JewishDate::is_kislev_short(self.jewish_date.jewish_year()))
                {
                    return Some(JewishHoliday::Chanukah);
                }
                if day == 10 {
                    return Some(JewishHoliday::TenthOfTeves);
                }
            }
            JewishMonth::Shevat => {
                if day == 15 {
                    return Some(JewishHoliday::TuBishvat);
                }
            }
            JewishMonth::Adar => {
                if !self.jewish_date.is_leap_year() {
                    if ((day == 11 || day == 12) && day_of_week == DayOfWeek::Thursday)
                        || (day == 13
                            && day_of_week != DayOfWeek::Friday
                            && day_of_week != DayOfWeek::Shabbos)
                    {
                        return Some(JewishHoliday::FastOfEsther);
                    }
                    if day == 14 {
                        return Some(JewishHoliday::Purim);
                    }
                    if day == 15 {
                        return Some(JewishHoliday::ShushanPurim);
                    }
                } else {
                    if day == 14 {
                        return Some(JewishHoliday::PurimKatan);
                    }
                    if day == 15 {
                        return Some(JewishHoliday::ShushanPurimKatan);
                    }
                }
            }
            JewishMonth::AdarII => {
                if ((day == 11 || day == 12) && day_of_week == DayOfWeek::Thursday)
                    || (day == 13
                        && day_of_week != DayOfWeek::Friday
                        && day_of_week != DayOfWeek::Shabbos)
                {
                    return Some(JewishHoliday::FastOfEsther);
                }
                if day == 14 {
                    return Some(JewishHoliday::Purim);
                }
                if day == 15 {
                    return Some(JewishHoliday::ShushanPurim);
                }
            }
        }
        None
    }

    pub fn is_yom_tov(&self) -> bool {
        let holiday = self.yom_tov_index();
        if self.is_erev_yom_tov()
            && !matches!(
                holiday,
                Some(JewishHoliday::HoshanaRabbah) | Some(JewishHoliday::CholHamoedPesach)
            )
        {
            return false;
        }
        if self.is_taanis() && holiday != Some(JewishHoliday::YomKippur) {
            return false;
        }
        if holiday == Some(JewishHoliday::IsruChag) {
            return false;
        }
        holiday.is_some()
    }

    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::Pesach)
                | Some(JewishHoliday::Shavuos)
                | Some(JewishHoliday::Succos)
                | Some(JewishHoliday::SheminiAtzeres)
                | Some(JewishHoliday::SimchasTorah)
                | Some(JewishHoliday::RoshHashana)
                | Some(JewishHoliday::YomKippur)
        )
    }

    pub fn is_assur_bemelacha(&self) -> bool {
        self.jewish_date.day_of_week() == DayOfWeek::Shabbos || self.is_yom_tov_assur_bemelacha()
    }

    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_shabbos_or_yom_tov()
    }

    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.jewish_date.day_of_week() == DayOfWeek::Friday
            || self.is_erev_yom_tov()
            || self.is_erev_yom_tov_sheni()
    }

    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let month = self.jewish_date.jewish_month();
        let day = self.jewish_date.jewish_day_of_month();
        if month == JewishMonth::Tishrei && day == 1 {
            return true;
        }
        if !self.in_israel {
            if month == JewishMonth::Nissan && (day == 15 || day == 21) {
                return true;
            }
            if month == JewishMonth::Tishrei && (day == 15 || day == 22) {
                return true;
            }
            if month == JewishMonth::Sivan && day == 6 {
                return true;
            }
        }
        false
    }

    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.jewish_date.jewish_month() == JewishMonth::Tishrei
            && self.jewish_date.jewish_day_of_month() <= 10
    }

    pub fn is_pesach(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::Pesach) | Some(JewishHoliday::CholHamoedPesach)
        )
    }

    pub fn is_chol_hamoed_pesach(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::CholHamoedPesach)
    }

    pub fn is_shavuos(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::Shavuos)
    }

    pub fn is_rosh_hashana(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::RoshHashana)
    }

    pub fn is_yom_kippur(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::YomKippur)
    }

    pub fn is_succos(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::Succos)
                | Some(JewishHoliday::CholHamoedSuccos)
                | Some(JewishHoliday::HoshanaRabbah)
        )
    }

    pub fn is_hoshana_rabba(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::HoshanaRabbah)
    }

    pub fn is_shemini_atzeres(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::SheminiAtzeres)
    }

    pub fn is_simchas_torah(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::SimchasTorah)
    }

    pub fn is_chol_hamoed_succos(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::CholHamoedSuccos) | Some(JewishHoliday::HoshanaRabbah)
        )
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.is_chol_hamoed_pesach() || self.is_chol_hamoed_succos()
    }

    pub fn is_erev_yom_tov(&self) -> bool {
        let holiday = self.yom_tov_index();
        matches!(
            holiday,
            Some(JewishHoliday::ErevPesach)
                | Some(JewishHoliday::ErevShavuos)
                | Some(JewishHoliday::ErevRoshHashana)
                | Some(JewishHoliday::ErevYomKippur)
                | Some(JewishHoliday::ErevSuccos)
                | Some(JewishHoliday::HoshanaRabbah)
        ) || (holiday == Some(JewishHoliday::CholHamoedPesach)
            && self.jewish_date.jewish_day_of_month() == 20)
    }

    /// Day 1 of every month except Tishrei, and day 30 of the prior month.
    pub fn is_rosh_chodesh(&self) -> bool {
        let day = self.jewish_date.jewish_day_of_month();
        (day == 1 && self.jewish_date.jewish_month() != JewishMonth::Tishrei) || day == 30
    }

    pub fn is_erev_rosh_chodesh(&self) -> bool {
        // 29 Elul is erev Rosh Hashana, not erev Rosh Chodesh.
        self.jewish_date.jewish_day_of_month() == 29
            && self.jewish_date.jewish_month() != JewishMonth::Elul
    }

    pub fn is_isru_chag(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::IsruChag)
    }

    pub fn is_taanis(&self) -> bool {
        matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::SeventeenthOfTammuz)
                | Some(JewishHoliday::TishaBeav)
                | Some(JewishHoliday::YomKippur)
                | Some(JewishHoliday::FastOfGedalyah)
                | Some(JewishHoliday::TenthOfTeves)
                | Some(JewishHoliday::FastOfEsther)
        )
    }

    /// The fast of the firstborn on erev Pesach, moved to the preceding
    /// Thursday when 14 Nissan is Shabbos.
    pub fn is_taanis_bechoros(&self) -> bool {
        let day = self.jewish_date.jewish_day_of_month();
        let day_of_week = self.jewish_date.day_of_week();
        self.jewish_date.jewish_month() == JewishMonth::Nissan
            && ((day == 14 && day_of_week != DayOfWeek::Shabbos)
                || (day == 12 && day_of_week == DayOfWeek::Thursday))
    }

    pub fn is_chanukah(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::Chanukah)
    }

    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        let day = self.jewish_date.jewish_day_of_month();
        if self.jewish_date.jewish_month() == JewishMonth::Kislev {
            Some(day - 24)
        } else if JewishDate::is_kislev_short(self.jewish_date.jewish_year()) {
            Some(day + 5)
        } else {
            Some(day + 6)
        }
    }

    pub fn is_purim(&self) -> bool {
        if self.is_mukaf_choma {
            self.yom_tov_index() == Some(JewishHoliday::ShushanPurim)
        } else {
            self.yom_tov_index() == Some(JewishHoliday::Purim)
        }
    }

    /// The omer count for this day, 1 through 49, from 16 Nissan through
    /// 5 Sivan.
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.jewish_date.jewish_day_of_month();
        match self.jewish_date.jewish_month() {
            JewishMonth::Nissan if day >= 16 => Some(day - 15),
            JewishMonth::Iyar => Some(day + 15),
            JewishMonth::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }

    pub fn is_tisha_beav(&self) -> bool {
        self.yom_tov_index() == Some(JewishHoliday::TishaBeav)
    }

    pub fn is_yom_kippur_katan(&self) -> bool {
        let day = self.jewish_date.jewish_day_of_month();
        let day_of_week = self.jewish_date.day_of_week();
        let month = self.jewish_date.jewish_month();
        if matches!(
            month,
            JewishMonth::Elul | JewishMonth::Tishrei | JewishMonth::Kislev | JewishMonth::Nissan
        ) {
            return false;
        }
        if day == 29 && day_of_week != DayOfWeek::Friday && day_of_week != DayOfWeek::Shabbos {
            return true;
        }
        (day == 27 || day == 28) && day_of_week == DayOfWeek::Thursday
    }

    /// BeHaB: the Monday, Thursday and Monday fasts after Pesach and
    /// Succos, observed in Iyar and Cheshvan.
    pub fn is_be_hab(&self) -> bool {
        let day = self.jewish_date.jewish_day_of_month();
        let day_of_week = self.jewish_date.day_of_week();
        let month = self.jewish_date.jewish_month();
        if month == JewishMonth::Cheshvan || month == JewishMonth::Iyar {
            return (day_of_week == DayOfWeek::Monday && day > 4 && day < 18)
                || (day_of_week == DayOfWeek::Thursday && day > 7 && day < 14);
        }
        false
    }

    pub fn is_machar_chodesh(&self) -> bool {
        self.jewish_date.day_of_week() == DayOfWeek::Shabbos
            && (self.jewish_date.jewish_day_of_month() == 30
                || self.jewish_date.jewish_day_of_month() == 29)
    }

    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.jewish_date.day_of_week() == DayOfWeek::Shabbos
            && self.jewish_date.jewish_day_of_month() >= 23
            && self.jewish_date.jewish_day_of_month() <= 29
            && self.jewish_date.jewish_month() != JewishMonth::Elul
    }

    /// Whether this date falls in the Shovavim weeks, when the parshiyos
    /// Shemos through Mishpatim (through Tetzaveh in a leap year) are read.
    pub fn is_shoavavim_week(&self) -> bool {
        let Some(parsha) = self.upcoming_parshah() else {
            return false;
        };
        let in_base_run = matches!(
            parsha,
            Parsha::Shemos
                | Parsha::Vaera
                | Parsha::Bo
                | Parsha::Beshalach
                | Parsha::Yisro
                | Parsha::Mishpatim
        );
        let in_leap_extension = self.jewish_date.is_leap_year()
            && matches!(parsha, Parsha::Terumah | Parsha::Tetzaveh);
        in_base_run || in_leap_extension
    }

    /// Birkas hachamah is recited when the vernal equinox of Shmuel
    /// returns to the hour of creation, every 28 solar years.
    pub fn is_birkas_hachamah(&self) -> bool {
        let elapsed = JewishDate::jewish_calendar_elapsed_days(self.jewish_date.jewish_year())
            + self.jewish_date.days_since_start_of_year();
        elapsed % 10227 == 172
    }

    /// The keviah-and-weekday year configuration that selects the parsha
    /// table, or `None` for impossible combinations.
    fn parsha_year_type(&self) -> Option<u8> {
        let year = self.jewish_date.jewish_year();
        let rh_day_of_week = match (JewishDate::jewish_calendar_elapsed_days(year) + 1) % 7 {
            0 => 7,
            d => d,
        };
        let kislev_short = JewishDate::is_kislev_short(year);
        let cheshvan_long = JewishDate::is_cheshvan_long(year);

        if JewishDate::is_jewish_leap_year(year) {
            match rh_day_of_week {
                2 => {
                    if kislev_short {
                        Some(if self.in_israel { 14 } else { 6 })
                    } else if cheshvan_long {
                        Some(if self.in_israel { 15 } else { 7 })
                    } else {
                        None
                    }
                }
                3 => Some(if self.in_israel { 15 } else { 7 }),
                5 => {
                    if kislev_short {
                        Some(8)
                    } else if cheshvan_long {
                        Some(9)
                    } else {
                        None
                    }
                }
                7 => {
                    if kislev_short {
                        Some(10)
                    } else if cheshvan_long {
                        Some(if self.in_israel { 16 } else { 11 })
                    } else {
                        None
                    }
                }
                _ => None,
            }
        } else {
            match rh_day_of_week {
                2 => {
                    if kislev_short {
                        Some(0)
                    } else if cheshvan_long {
                        Some(if self.in_israel { 12 } else { 1 })
                    } else {
                        None
                    }
                }
                3 => Some(if self.in_israel { 12 } else { 1 }),
                5 => {
                    if cheshvan_long {
                        Some(3)
                    } else if !kislev_short {
                        Some(if self.in_israel { 13 } else { 2 })
                    } else {
                        None
                    }
                }
                7 => {
                    if kislev_short {
                        Some(4)
                    } else if cheshvan_long {
                        Some(5)
                    } else {
                        None
                    }
                }
                _ => None,
            }
        }
    }

    /// The weekly portion read on this Shabbos, or `None` on weekdays and
    /// on yom tov Shabbosos with no weekly reading.
    pub fn parshah(&self) -> Option<Parsha> {
        if self.jewish_date.day_of_week() != DayOfWeek::Shabbos {
            return None;
        }
        let year_type = self.parsha_year_type()?;
        let rh_elapsed =
            JewishDate::jewish_calendar_elapsed_days(self.jewish_date.jewish_year()) % 7;
        let day = rh_elapsed + self.jewish_date.days_since_start_of_year();
        parsha_for_week(year_type, (day / 7) as usize)
    }

    /// The parsha of the coming Shabbos (or of today, if today is a
    /// Shabbos with a reading), skipping yom tov weeks.
    pub fn upcoming_parshah(&self) -> Option<Parsha> {
        let day_of_week = self.jewish_date.day_of_week();
        let mut days_ahead = (DayOfWeek::Shabbos as i64 - day_of_week as i64).rem_euclid(7);
        // Look ahead a bounded number of weeks; the longest run of
        // readingless Shabbosos is over Tishrei.
        for _ in 0..6 {
            let shabbos = Self {
                jewish_date: self.jewish_date.forward(CalendarUnit::Day, days_ahead).ok()?,
                ..*self
            };
            if let Some(parsha) = shabbos.parshah() {
                return Some(parsha);
            }
            days_ahead += 7;
        }
        None
    }

    /// The special Shabbos overlay (Shekalim, Zachor, Parah, Hachodesh,
    /// Shuva, Shira, Hagadol, Chazon, Nachamu), if today is one.
    pub fn special_shabbos(&self) -> Option<Parsha> {
        if self.jewish_date.day_of_week() != DayOfWeek::Shabbos {
            return None;
        }
        let month = self.jewish_date.jewish_month();
        let day = self.jewish_date.jewish_day_of_month();
        let is_leap = self.jewish_date.is_leap_year();

        if ((month == JewishMonth::Shevat && !is_leap) || (month == JewishMonth::Adar && is_leap))
            && (day == 25 || day == 27 || day == 29)
        {
            return Some(Parsha::Shekalim);
        }
        if (month == JewishMonth::Adar && !is_leap) || month == JewishMonth::AdarII {
            if day == 1 {
                return Some(Parsha::Shekalim);
            }
            if day == 8 || day == 9 || day == 11 || day == 13 {
                return Some(Parsha::Zachor);
            }
            if day == 18 || day == 20 || day == 22 || day == 23 {
                return Some(Parsha::Parah);
            }
            if day == 25 || day == 27 || day == 29 {
                return Some(Parsha::Hachodesh);
            }
        }
        if month == JewishMonth::Nissan {
            if day == 1 {
                return Some(Parsha::Hachodesh);
            }
            if (8..=14).contains(&day) {
                return Some(Parsha::Hagadol);
            }
        }
        if month == JewishMonth::Av {
            if (4..=9).contains(&day) {
                return Some(Parsha::Chazon);
            }
            if (10..=16).contains(&day) {
                return Some(Parsha::Nachamu);
            }
        }
        if month == JewishMonth::Tishrei && (3..=8).contains(&day) {
            return Some(Parsha::Shuva);
        }
        if self.parshah() == Some(Parsha::Beshalach) {
            return Some(Parsha::Shira);
        }
        None
    }

    /// The molad of this month as a civil instant. The traditional molad
    /// is quoted in Jerusalem standard time (GMT+2); converting to an
    /// instant subtracts the local-mean-time offset of the Har Habayis
    /// longitude (35.2354 degrees), 20 minutes 56.496 seconds east of the
    /// GMT+2 meridian reference.
    pub fn molad_as_instant(&self) -> Result<DateTime<Utc>, ZmanimError> {
        let (molad_date, molad) = self.jewish_date.molad()?;

        let molad_seconds = molad.chalakim as f64 * 10.0 / 3.0;
        let seconds = molad_seconds as u32;
        let millis = ((molad_seconds - seconds as f64) * 1000.0) as u32;

        let naive = chrono::NaiveDate::from_ymd_opt(
            molad_date.gregorian_year(),
            molad_date.gregorian_month() as u32,
            molad_date.gregorian_day_of_month() as u32,
        )
        .and_then(|d| d.and_hms_milli_opt(molad.hours as u32, molad.minutes as u32, seconds, millis))
        .ok_or(ZmanimError::InvalidCivilDate)?;

        let jerusalem = FixedOffset::east_opt(2 * 3600).ok_or(ZmanimError::InvalidCivilDate)?;
        let local = jerusalem
            .from_local_datetime(&naive)
            .single()
            .ok_or(ZmanimError::InvalidCivilDate)?;
        Ok(local.to_utc() - Duration::milliseconds(1256496))
    }

    /// Earliest kiddush levana per opinions requiring three full days from
    /// the molad.
    pub fn tchilas_zman_kidush_levana_3_days(&self) -> Result<DateTime<Utc>, ZmanimError> {
        Ok(self.molad_as_instant()? + Duration::hours(72))
    }

    /// Earliest kiddush levana per the opinions requiring seven full days.
    pub fn tchilas_zman_kidush_levana_7_days(&self) -> Result<DateTime<Utc>, ZmanimError> {
        Ok(self.molad_as_instant()? + Duration::hours(168))
    }

    /// Latest kiddush levana per the Maharil: half the synodic month after
    /// the molad, 14 days 18 hours 22 minutes 1.666 seconds.
    pub fn sof_zman_kidush_levana_between_moldos(&self) -> Result<DateTime<Utc>, ZmanimError> {
        Ok(self.molad_as_instant()?
            + Duration::hours(24 * 14 + 18)
            + Duration::minutes(22)
            + Duration::seconds(1)
            + Duration::milliseconds(666))
    }

    /// Latest kiddush levana per the Rema's plain 15 days.
    pub fn sof_zman_kidush_levana_15_days(&self) -> Result<DateTime<Utc>, ZmanimError> {
        Ok(self.molad_as_instant()? + Duration::hours(24 * 15))
    }

    /// Days since the tekufas Tishrei of Shmuel's 365.25-day solar year.
    pub fn tekufas_tishrei_elapsed_days(&self) -> i64 {
        let days = JewishDate::jewish_calendar_elapsed_days(self.jewish_date.jewish_year()) as f64
            + (self.jewish_date.days_since_start_of_year() - 1) as f64
            + 0.5;
        let solar = (self.jewish_date.jewish_year() - 1) as f64 * 365.25;
        (days - solar).floor() as i64
    }

    pub fn is_vesein_tal_umatar_start_date(&self) -> bool {
        if self.in_israel {
            return self.jewish_date.jewish_month() == JewishMonth::Cheshvan
                && self.jewish_date.jewish_day_of_month() == 7;
        }
        match self.jewish_date.day_of_week() {
            DayOfWeek::Shabbos => false,
            DayOfWeek::Sunday => {
                matches!(self.tekufas_tishrei_elapsed_days(), 47 | 48)
            }
            _ => self.tekufas_tishrei_elapsed_days() == 47,
        }
    }

    pub fn is_vesein_tal_umatar_starting_tonight(&self) -> bool {
        if self.in_israel {
            return self.jewish_date.jewish_month() == JewishMonth::Cheshvan
                && self.jewish_date.jewish_day_of_month() == 6;
        }
        match self.jewish_date.day_of_week() {
            DayOfWeek::Friday => false,
            DayOfWeek::Shabbos => {
                matches!(self.tekufas_tishrei_elapsed_days(), 46 | 47)
            }
            _ => self.tekufas_tishrei_elapsed_days() == 46,
        }
    }

    pub fn is_vesein_tal_umatar_recited(&self) -> bool {
        let month = self.jewish_date.jewish_month();
        let day = self.jewish_date.jewish_day_of_month();
        if month == JewishMonth::Nissan && day < 15 {
            return true;
        }
        if month < JewishMonth::Cheshvan {
            return false;
        }
        if self.in_israel {
            month != JewishMonth::Cheshvan || day >= 7
        } else {
            self.tekufas_tishrei_elapsed_days() >= 47
        }
    }

    pub fn is_vesein_beracha_recited(&self) -> bool {
        !self.is_vesein_tal_umatar_recited()
    }

    pub fn is_mashiv_haruach_start_date(&self) -> bool {
        self.jewish_date.jewish_month() == JewishMonth::Tishrei
            && self.jewish_date.jewish_day_of_month() == 22
    }

    pub fn is_mashiv_haruach_end_date(&self) -> bool {
        self.jewish_date.jewish_month() == JewishMonth::Nissan
            && self.jewish_date.jewish_day_of_month() == 15
    }

    pub fn is_mashiv_haruach_recited(&self) -> bool {
        let year = self.jewish_date.jewish_year();
        let start = JewishDate::from_jewish_date(year, JewishMonth::Tishrei, 22);
        let end = JewishDate::from_jewish_date(year, JewishMonth::Nissan, 15);
        match (start, end) {
            (Ok(start), Ok(end)) => {
                self.jewish_date.abs_date() > start.abs_date()
                    && self.jewish_date.abs_date() < end.abs_date()
            }
            _ => false,
        }
    }

    pub fn is_morid_hatal_recited(&self) -> bool {
        !self.is_mashiv_haruach_recited()
            || self.is_mashiv_haruach_start_date()
            || self.is_mashiv_haruach_end_date()
    }

    fn utc_midnight(date: &JewishDate) -> Result<DateTime<Utc>, ZmanimError> {
        Utc.with_ymd_and_hms(
            date.gregorian_year(),
            date.gregorian_month() as u32,
            date.gregorian_day_of_month() as u32,
            0,
            0,
            0,
        )
        .single()
        .ok_or(ZmanimError::InvalidCivilDate)
    }

    /// The Bavli daf of the day. The first seven cycles were 2702 days;
    /// from the eighth cycle (June 24 1975) Shekalim grew from 13 to 22
    /// daf and the cycle to 2711 days.
    pub fn daf_yomi_bavli(&self) -> Result<BavliDaf, ZmanimError> {
        let date = Self::utc_midnight(&self.jewish_date)?;
        let millis = date.timestamp_millis();
        if millis < BAVLI_CYCLE_START_MILLIS {
            return Err(ZmanimError::BeforeCycleStart);
        }

        let cycle_start = DateTime::from_timestamp_millis(BAVLI_CYCLE_START_MILLIS)
            .ok_or(ZmanimError::BeforeCycleStart)?;
        let shekalim_change = DateTime::from_timestamp_millis(BAVLI_SHEKALIM_CHANGE_MILLIS)
            .ok_or(ZmanimError::BeforeCycleStart)?;

        let jd = julian_day(&date) as i64;
        let jd_start = julian_day(&cycle_start) as i64;
        let jd_change = julian_day(&shekalim_change) as i64;

        let (cycle_no, daf_no) = if millis >= BAVLI_SHEKALIM_CHANGE_MILLIS {
            (8 + (jd - jd_change) / 2711, (jd - jd_change) % 2711)
        } else {
            (1 + (jd - jd_start) / 2702, (jd - jd_start) % 2702)
        };

        let mut blatt_table = BLATT_PER_BAVLI_TRACTATE;
        if cycle_no <= 7 {
            blatt_table[4] = SHEKALIM_BLATT_BEFORE_CYCLE_8;
        }

        let mut total = 0;
        for (i, &blatt_count) in blatt_table.iter().enumerate() {
            total += blatt_count - 1;
            if daf_no < total {
                let page = 1 + blatt_count - (total - daf_no) + bavli_page_offset(i);
                let tractate =
                    BavliTractate::try_from(i as u8).map_err(|_| ZmanimError::BeforeCycleStart)?;
                return Ok(BavliDaf { tractate, page });
            }
        }
        Err(ZmanimError::BeforeCycleStart)
    }

    /// Yom Kippur and Tisha B'Av between two instants, for the Yerushalmi
    /// skip-day accounting.
    fn yerushalmi_skip_days(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<u64, ZmanimError> {
        let start_year = JewishDate::from_date_time(&start)?.jewish_year();
        let end_year = JewishDate::from_date_time(&end)?.jewish_year();

        let mut skipped = 0u64;
        for year in start_year..=end_year {
            let yom_kippur = JewishDate::from_jewish_date(year, JewishMonth::Tishrei, 10)?;
            let tisha_beav = JewishDate::from_jewish_date(year, JewishMonth::Av, 9)?;
            for d in [yom_kippur, tisha_beav] {
                let dt = Self::utc_midnight(&d)?;
                if dt > start && dt < end {
                    skipped += 1;
                }
            }
        }
        Ok(skipped)
    }

    /// The Yerushalmi daf of the day. Yom Kippur and Tisha B'Av have no
    /// daf and report the `NoDaf` sentinel with page 0.
    pub fn daf_yomi_yerushalmi(&self) -> Result<YerushalmiDaf, ZmanimError> {
        if matches!(
            self.yom_tov_index(),
            Some(JewishHoliday::YomKippur) | Some(JewishHoliday::TishaBeav)
        ) {
            return Ok(YerushalmiDaf {
                tractate: YerushalmiTractate::NoDaf,
                page: 0,
            });
        }

        let requested = Self::utc_midnight(&self.jewish_date)?;
        if requested.timestamp_millis() < YERUSHALMI_CYCLE_START_MILLIS {
            return Err(ZmanimError::BeforeCycleStart);
        }

        let mut next_cycle = DateTime::from_timestamp_millis(YERUSHALMI_CYCLE_START_MILLIS)
            .ok_or(ZmanimError::BeforeCycleStart)?;
        let mut prev_cycle = next_cycle;
        while requested > next_cycle {
            prev_cycle = next_cycle;
            next_cycle += Duration::days(YERUSHALMI_CYCLE_DAYS as i64);
            next_cycle +=
                Duration::days(Self::yerushalmi_skip_days(prev_cycle, next_cycle)? as i64);
        }

        let day_in_cycle = (requested - prev_cycle).num_days() as u64;
        let skipped = Self::yerushalmi_skip_days(prev_cycle, requested)?;
        if skipped > day_in_cycle {
            return Err(ZmanimError::BeforeCycleStart);
        }
        let mut remaining = (day_in_cycle - skipped) as i64;

        for (i, &blatt_count) in BLATT_PER_YERUSHALMI_TRACTATE.iter().enumerate() {
            if remaining < blatt_count {
                let tractate = YerushalmiTractate::try_from(i as u8)
                    .map_err(|_| ZmanimError::BeforeCycleStart)?;
                return Ok(YerushalmiDaf {
                    tractate,
                    page: remaining + 1,
                });
            }
            remaining -= blatt_count;
        }
        Ok(YerushalmiDaf {
            tractate: YerushalmiTractate::Berachos,
            page: 1,
        })
    }

    /// Whether tomorrow is chanukah, used by candle-lighting displays.
    pub fn is_erev_chanukah(&self) -> bool {
        self.tomorrow().map(|t| t.day_of_chanukah() == Some(1)).unwrap_or(false)
    }
}
