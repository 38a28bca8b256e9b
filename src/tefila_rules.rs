use crate::constants::{DayOfWeek, JewishHoliday, JewishMonth};
use crate::jewish_calendar::JewishCalendar;
use crate::jewish_date::CalendarUnit;

/// Minhag toggles for the tefila predicates. Every option names a window
/// where practice varies; `true` means tachanun IS recited there. The
/// defaults follow common practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TefilaRules {
    /// Tachanun on 22-29 Tishrei, after Succos ends.
    pub tachanun_recited_end_of_tishrei: bool,
    /// Tachanun on 7-12 Sivan, the week after Shavuos.
    pub tachanun_recited_week_after_shavuos: bool,
    /// Tachanun on 13 Sivan outside Israel.
    pub tachanun_recited_13_sivan_out_of_israel: bool,
    /// Tachanun on Pesach Sheni (14 Iyar).
    pub tachanun_recited_pesach_sheni: bool,
    /// Tachanun on 15 Iyar outside Israel.
    pub tachanun_recited_15_iyar_out_of_israel: bool,
    /// Tachanun at mincha on erev Lag BaOmer.
    pub tachanun_recited_mincha_erev_lag_baomer: bool,
    /// Tachanun during the shivas yemei hamiluim, 23-29 Adar.
    pub tachanun_recited_shivas_yemei_hamiluim: bool,
    /// Tachanun during the week of Hod, 14-20 Iyar.
    pub tachanun_recited_week_of_hod: bool,
    /// Tachanun during the week of Purim, 11-17 Adar.
    pub tachanun_recited_week_of_purim: bool,
    pub tachanun_recited_fridays: bool,
    pub tachanun_recited_sundays: bool,
    /// Master switch for tachanun at mincha.
    pub tachanun_recited_mincha_all_year: bool,
    /// Mizmor lesoda on erev Yom Kippur, erev Pesach and chol hamoed
    /// Pesach (the minhag of Eretz Yisrael).
    pub mizmor_lesoda_recited_erev_yom_kippur_and_pesach: bool,
}

impl Default for TefilaRules {
    fn default() -> Self {
        Self {
            tachanun_recited_end_of_tishrei: true,
            tachanun_recited_week_after_shavuos: false,
            tachanun_recited_13_sivan_out_of_israel: true,
            tachanun_recited_pesach_sheni: false,
            tachanun_recited_15_iyar_out_of_israel: true,
            tachanun_recited_mincha_erev_lag_baomer: false,
            tachanun_recited_shivas_yemei_hamiluim: true,
            tachanun_recited_week_of_hod: true,
            tachanun_recited_week_of_purim: true,
            tachanun_recited_fridays: true,
            tachanun_recited_sundays: true,
            tachanun_recited_mincha_all_year: true,
            mizmor_lesoda_recited_erev_yom_kippur_and_pesach: true,
        }
    }
}

impl TefilaRules {
    pub fn is_tachanun_recited_shacharis(&self, jewish_calendar: &JewishCalendar) -> bool {
        let jewish_date = jewish_calendar.jewish_date();
        let holiday = jewish_calendar.yom_tov_index();
        let day = jewish_date.jewish_day_of_month();
        let month = jewish_date.jewish_month();
        let day_of_week = jewish_date.day_of_week();
        let is_leap = jewish_date.is_leap_year();
        let purim_month = if is_leap { JewishMonth::AdarII } else { JewishMonth::Adar };

        if day_of_week == DayOfWeek::Shabbos
            || (!self.tachanun_recited_sundays && day_of_week == DayOfWeek::Sunday)
            || (!self.tachanun_recited_fridays && day_of_week == DayOfWeek::Friday)
            || month == JewishMonth::Nissan
            || (month == JewishMonth::Tishrei
                && ((!self.tachanun_recited_end_of_tishrei && day > 8)
                    || (self.tachanun_recited_end_of_tishrei && day > 8 && day < 22)))
            || (month == JewishMonth::Sivan
                && ((self.tachanun_recited_week_after_shavuos && day < 7)
                    || (!self.tachanun_recited_week_after_shavuos
                        && day
                            < if !jewish_calendar.in_israel()
                                && !self.tachanun_recited_13_sivan_out_of_israel
                            {
                                14
                            } else {
                                13
                            })))
            || jewish_calendar.is_erev_yom_tov()
            || (jewish_calendar.is_yom_tov()
                && !jewish_calendar.is_taanis()
                && !(self.tachanun_recited_pesach_sheni
                    && holiday == Some(JewishHoliday::PesachSheni)))
            || (!jewish_calendar.in_israel()
                && !self.tachanun_recited_pesach_sheni
                && !self.tachanun_recited_15_iyar_out_of_israel
                && month == JewishMonth::Iyar
                && day == 15)
            || holiday == Some(JewishHoliday::TishaBeav)
            || jewish_calendar.is_isru_chag()
            || jewish_calendar.is_rosh_chodesh()
            || (!self.tachanun_recited_shivas_yemei_hamiluim && month == purim_month && day > 22)
            || (!self.tachanun_recited_week_of_purim
                && month == purim_month
                && day > 10
                && day < 18)
            || (jewish_calendar.use_modern_holidays()
                && matches!(
                    holiday,
                    Some(JewishHoliday::YomHaatzmaut) | Some(JewishHoliday::YomYerushalayim)
                ))
            || (!self.tachanun_recited_week_of_hod
                && month == JewishMonth::Iyar
                && day > 13
                && day < 21)
        {
            return false;
        }
        true
    }

    pub fn is_tachanun_recited_mincha(&self, jewish_calendar: &JewishCalendar) -> bool {
        let Ok(tomorrow_date) = jewish_calendar.jewish_date().forward(CalendarUnit::Day, 1) else {
            return false;
        };
        let tomorrow = JewishCalendar::new(tomorrow_date, jewish_calendar.in_israel())
            .with_mukaf_choma(jewish_calendar.is_mukaf_choma())
            .with_modern_holidays(jewish_calendar.use_modern_holidays());
        let tomorrow_yom_tov = tomorrow.yom_tov_index();

        if !self.tachanun_recited_mincha_all_year
            || jewish_calendar.jewish_date().day_of_week() == DayOfWeek::Friday
            || !self.is_tachanun_recited_shacharis(jewish_calendar)
            || (!self.is_tachanun_recited_shacharis(&tomorrow)
                && tomorrow_yom_tov != Some(JewishHoliday::ErevRoshHashana)
                && tomorrow_yom_tov != Some(JewishHoliday::ErevYomKippur)
                && tomorrow_yom_tov != Some(JewishHoliday::PesachSheni))
            || (!self.tachanun_recited_mincha_erev_lag_baomer
                && tomorrow_yom_tov == Some(JewishHoliday::LagBaomer))
        {
            return false;
        }
        true
    }

    pub fn is_hallel_recited(&self, jewish_calendar: &JewishCalendar) -> bool {
        let jewish_date = jewish_calendar.jewish_date();
        let day = jewish_date.jewish_day_of_month();
        let in_israel = jewish_calendar.in_israel();

        if jewish_calendar.is_rosh_chodesh() || jewish_calendar.is_chanukah() {
            return true;
        }
        match jewish_date.jewish_month() {
            JewishMonth::Nissan => day >= 15 && ((in_israel && day <= 21) || (!in_israel && day <= 22)),
            JewishMonth::Iyar => {
                jewish_calendar.use_modern_holidays()
                    && matches!(
                        jewish_calendar.yom_tov_index(),
                        Some(JewishHoliday::YomHaatzmaut) | Some(JewishHoliday::YomYerushalayim)
                    )
            }
            JewishMonth::Sivan => day == 6 || (!in_israel && day == 7),
            JewishMonth::Tishrei => day >= 15 && (day <= 22 || (!in_israel && day <= 23)),
            _ => false,
        }
    }

    /// Full hallel; on the later days of Pesach and on Rosh Chodesh only
    /// half hallel is said.
    pub fn is_hallel_shalem_recited(&self, jewish_calendar: &JewishCalendar) -> bool {
        let jewish_date = jewish_calendar.jewish_date();
        let day = jewish_date.jewish_day_of_month();
        let in_israel = jewish_calendar.in_israel();
        if !self.is_hallel_recited(jewish_calendar) {
            return false;
        }
        !((jewish_calendar.is_rosh_chodesh() && !jewish_calendar.is_chanukah())
            || (jewish_date.jewish_month() == JewishMonth::Nissan
                && ((in_israel && day > 15) || (!in_israel && day > 16))))
    }

    pub fn is_al_hanissim_recited(&self, jewish_calendar: &JewishCalendar) -> bool {
        jewish_calendar.is_purim() || jewish_calendar.is_chanukah()
    }

    pub fn is_yaaleh_veyavo_recited(&self, jewish_calendar: &JewishCalendar) -> bool {
        jewish_calendar.is_pesach()
            || jewish_calendar.is_shavuos()
            || jewish_calendar.is_rosh_hashana()
            || jewish_calendar.is_yom_kippur()
            || jewish_calendar.is_succos()
            || jewish_calendar.is_shemini_atzeres()
            || jewish_calendar.is_simchas_torah()
            || jewish_calendar.is_rosh_chodesh()
    }

    pub fn is_mizmor_lesoda_recited(&self, jewish_calendar: &JewishCalendar) -> bool {
        if jewish_calendar.is_assur_bemelacha() {
            return false;
        }
        let holiday = jewish_calendar.yom_tov_index();
        !(!self.mizmor_lesoda_recited_erev_yom_kippur_and_pesach
            && (holiday == Some(JewishHoliday::ErevYomKippur)
                || holiday == Some(JewishHoliday::ErevPesach)
                || jewish_calendar.is_chol_hamoed_pesach()))
    }
}
