use chrono::{Datelike, Timelike};

use crate::constants::{
    BavliTractate, DayOfWeek, JewishHoliday, JewishMonth, Parsha, YerushalmiTractate,
};
use crate::error::ZmanimError;
use crate::jewish_calendar::JewishCalendar;

fn diaspora(year: i32, month: u8, day: u8) -> JewishCalendar {
    JewishCalendar::from_gregorian_date(year, month, day, false).expect("valid date")
}

fn israel(year: i32, month: u8, day: u8) -> JewishCalendar {
    JewishCalendar::from_gregorian_date(year, month, day, true).expect("valid date")
}

#[test]
fn test_pesach_5782() {
    // 15 Nissan 5782 was April 16 2022.
    assert_eq!(diaspora(2022, 4, 16).yom_tov_index(), Some(JewishHoliday::Pesach));
    assert_eq!(israel(2022, 4, 16).yom_tov_index(), Some(JewishHoliday::Pesach));
    // Second day is yom tov only in the diaspora.
    assert_eq!(diaspora(2022, 4, 17).yom_tov_index(), Some(JewishHoliday::Pesach));
    assert_eq!(israel(2022, 4, 17).yom_tov_index(), Some(JewishHoliday::CholHamoedPesach));
    assert!(diaspora(2022, 4, 16).is_yom_tov());
    assert!(israel(2022, 4, 17).is_chol_hamoed());
}

#[test]
fn test_simchas_torah_merges_in_israel() {
    // 22 Tishrei 5783 was October 17 2022.
    assert_eq!(diaspora(2022, 10, 17).yom_tov_index(), Some(JewishHoliday::SheminiAtzeres));
    assert_eq!(israel(2022, 10, 17).yom_tov_index(), Some(JewishHoliday::SheminiAtzeres));
    assert_eq!(diaspora(2022, 10, 18).yom_tov_index(), Some(JewishHoliday::SimchasTorah));
    assert_eq!(israel(2022, 10, 18).yom_tov_index(), Some(JewishHoliday::IsruChag));
}

#[test]
fn test_seventeen_tammuz_pushed_off_shabbos() {
    // 17 Tammuz 5782 fell on Shabbos July 16 2022; the fast moved to
    // Sunday the 18th.
    let shabbos = diaspora(2022, 7, 16);
    assert_eq!(shabbos.jewish_date().day_of_week(), DayOfWeek::Shabbos);
    assert_eq!(shabbos.yom_tov_index(), None);
    assert!(!shabbos.is_taanis());
    let sunday = diaspora(2022, 7, 17);
    assert_eq!(sunday.yom_tov_index(), Some(JewishHoliday::SeventeenthOfTammuz));
    assert!(sunday.is_taanis());
}

#[test]
fn test_chanukah_days() {
    // Chanukah 5783 began the evening of December 18 2022; 25 Kislev was
    // December 19.
    let first = diaspora(2022, 12, 19);
    assert!(first.is_chanukah());
    assert_eq!(first.day_of_chanukah(), Some(1));
    let last = diaspora(2022, 12, 26);
    assert_eq!(last.day_of_chanukah(), Some(8));
    assert_eq!(diaspora(2022, 12, 27).day_of_chanukah(), None);
}

#[test]
fn test_omer_count() {
    // 16 Nissan 5782 = April 17 2022, omer day 1.
    assert_eq!(diaspora(2022, 4, 17).day_of_omer(), Some(1));
    // Lag Baomer, 18 Iyar = May 19 2022.
    assert_eq!(diaspora(2022, 5, 19).day_of_omer(), Some(33));
    // 5 Sivan = June 4 2022, omer day 49.
    assert_eq!(diaspora(2022, 6, 4).day_of_omer(), Some(49));
    assert_eq!(diaspora(2022, 6, 5).day_of_omer(), None);
}

#[test]
fn test_rosh_chodesh() {
    // 1 Iyar 5782 = May 2 2022; 30 Nissan (May 1) is also Rosh Chodesh.
    assert!(diaspora(2022, 5, 1).is_rosh_chodesh());
    assert!(diaspora(2022, 5, 2).is_rosh_chodesh());
    assert!(!diaspora(2022, 5, 3).is_rosh_chodesh());
    // 1 Tishrei is Rosh Hashana, not Rosh Chodesh.
    assert!(!diaspora(2022, 9, 26).is_rosh_chodesh());
}

#[test]
fn test_parsha_israel_diaspora_divergence() {
    // Shabbos May 28 2022: Bamidbar in Israel, Bechukosai outside.
    assert_eq!(israel(2022, 5, 28).parshah(), Some(Parsha::Bamidbar));
    assert_eq!(diaspora(2022, 5, 28).parshah(), Some(Parsha::Bechukosai));
    // A weekday has no parsha.
    assert_eq!(diaspora(2022, 5, 27).parshah(), None);
}

#[test]
fn test_parsha_more_known_weeks() {
    // October 2 2021 was Shabbos Bereshis everywhere.
    assert_eq!(diaspora(2021, 10, 2).parshah(), Some(Parsha::Bereshis));
    assert_eq!(israel(2021, 10, 2).parshah(), Some(Parsha::Bereshis));
    // July 30 2022: Matos-Masei doubled outside Israel, Masei alone inside.
    assert_eq!(diaspora(2022, 7, 30).parshah(), Some(Parsha::MatosMasei));
    assert_eq!(israel(2022, 7, 30).parshah(), Some(Parsha::Masei));
    // September 24 2022, the Shabbos before Rosh Hashana 5783: Nitzavim.
    assert_eq!(diaspora(2022, 9, 24).parshah(), Some(Parsha::Nitzavim));
    // September 9 2023: Nitzavim-Vayeilech, ahead of a Shabbos RH.
    assert_eq!(diaspora(2023, 9, 9).parshah(), Some(Parsha::NitzavimVayeilech));
}

#[test]
fn test_parsha_defined_or_absorbed_on_every_shabbos() {
    // Walk three full years of Shabbosos; the lookup must never be out of
    // range, and a None is only legal on a yom tov or chol hamoed week.
    for il in [false, true] {
        let mut date = *diaspora(2021, 9, 11).jewish_date();
        for _ in 0..(3 * 365 / 7) {
            assert_eq!(date.day_of_week(), DayOfWeek::Shabbos);
            let shabbos = JewishCalendar::new(date, il);
            if shabbos.parshah().is_none() {
                assert!(
                    shabbos.is_yom_tov() || shabbos.is_chol_hamoed(),
                    "no parsha on a plain Shabbos {:?}",
                    date
                );
            }
            date = date.forward(crate::jewish_date::CalendarUnit::Day, 7).expect("valid");
        }
    }
}

#[test]
fn test_special_shabbosos_5782() {
    // Shabbos Zachor was March 12 2022, the Shabbos before Purim.
    assert_eq!(diaspora(2022, 3, 12).special_shabbos(), Some(Parsha::Zachor));
    // Shabbos Hagadol was April 9 2022.
    assert_eq!(diaspora(2022, 4, 9).special_shabbos(), Some(Parsha::Hagadol));
    // Shabbos Chazon was August 6 2022.
    assert_eq!(diaspora(2022, 8, 6).special_shabbos(), Some(Parsha::Chazon));
    // Shabbos Shira coincides with Beshalach, January 15 2022.
    assert_eq!(diaspora(2022, 1, 15).special_shabbos(), Some(Parsha::Shira));
}

#[test]
fn test_upcoming_parshah_skips_yom_tov_weeks() {
    // Mid-week before Shabbos Bamidbar (diaspora June 4 2022 is Nasso in
    // Israel; diaspora reads Bamidbar).
    assert_eq!(diaspora(2022, 5, 30).upcoming_parshah(), Some(Parsha::Bamidbar));
    // During Succos the next read parsha is Bereshis.
    assert_eq!(diaspora(2022, 10, 12).upcoming_parshah(), Some(Parsha::Bereshis));
}

#[test]
fn test_daf_yomi_bavli_scenarios() {
    // December 9 1924, during the first cycle.
    let daf = diaspora(1924, 12, 9).daf_yomi_bavli().expect("in cycle");
    assert_eq!(daf.tractate, BavliTractate::Yoma);
    assert_eq!(daf.tractate as u8, 5);
    assert_eq!(daf.page, 2);

    // September 1 2017: Sanhedrin 47.
    let daf = diaspora(2017, 9, 1).daf_yomi_bavli().expect("in cycle");
    assert_eq!(daf.tractate, BavliTractate::Sanhedrin);
    assert_eq!(daf.tractate as u8, 23);
    assert_eq!(daf.page, 47);
}

#[test]
fn test_daf_yomi_bavli_before_cycle() {
    assert_eq!(
        diaspora(1920, 1, 1).daf_yomi_bavli().unwrap_err(),
        ZmanimError::BeforeCycleStart
    );
}

#[test]
fn test_daf_yomi_yerushalmi_scenarios() {
    // September 1 2017: Kidushin 8.
    let daf = diaspora(2017, 9, 1).daf_yomi_yerushalmi().expect("in cycle");
    assert_eq!(daf.tractate, YerushalmiTractate::Kidushin);
    assert_eq!(daf.tractate as u8, 29);
    assert_eq!(daf.page, 8);

    // Yom Kippur 5775 (October 4 2014) has no daf.
    let daf = diaspora(2014, 10, 4).daf_yomi_yerushalmi().expect("sentinel");
    assert_eq!(daf.tractate, YerushalmiTractate::NoDaf);
    assert_eq!(daf.tractate as u8, 39);
    assert_eq!(daf.page, 0);
}

#[test]
fn test_daf_yomi_yerushalmi_before_cycle() {
    assert_eq!(
        diaspora(1979, 1, 1).daf_yomi_yerushalmi().unwrap_err(),
        ZmanimError::BeforeCycleStart
    );
}

#[test]
fn test_molad_as_instant_tishrei_5782() {
    // Molad Tishrei 5782: Monday night September 6 2021, 23:27 and 11
    // chalakim Jerusalem mean time. As a civil instant that is about
    // 23:06 Israel standard time, 21:06 UTC.
    let molad = diaspora(2021, 9, 10).molad_as_instant().expect("valid");
    assert_eq!((molad.year(), molad.month(), molad.day()), (2021, 9, 6));
    assert_eq!(molad.hour(), 21);
    assert_eq!(molad.minute(), 6);
}

#[test]
fn test_kiddush_levana_window_ordering() {
    let cal = diaspora(2022, 5, 10);
    let tchilas_3 = cal.tchilas_zman_kidush_levana_3_days().expect("valid");
    let tchilas_7 = cal.tchilas_zman_kidush_levana_7_days().expect("valid");
    let sof_moldos = cal.sof_zman_kidush_levana_between_moldos().expect("valid");
    let sof_15 = cal.sof_zman_kidush_levana_15_days().expect("valid");
    assert!(tchilas_3 < tchilas_7);
    assert!(tchilas_7 < sof_moldos);
    assert!(sof_moldos < sof_15);
}

#[test]
fn test_yom_haatzmaut_shifts() {
    // 5 Iyar 5782 fell on Friday May 6 2022, so Yom Haatzmaut was
    // observed Thursday May 5 (4 Iyar).
    assert_eq!(israel(2022, 5, 5).yom_tov_index(), Some(JewishHoliday::YomHaatzmaut));
    assert_eq!(israel(2022, 5, 6).yom_tov_index(), None);
    // Without modern holidays nothing is reported.
    let plain = israel(2022, 5, 5).with_modern_holidays(false);
    assert_eq!(plain.yom_tov_index(), None);
}

#[test]
fn test_purim_mukaf_choma() {
    // 14 Adar II 5782 = March 17 2022.
    let city = diaspora(2022, 3, 17);
    assert!(city.is_purim());
    let walled = diaspora(2022, 3, 17).with_mukaf_choma(true);
    assert!(!walled.is_purim());
    let walled_shushan = diaspora(2022, 3, 18).with_mukaf_choma(true);
    assert!(walled_shushan.is_purim());
}

#[test]
fn test_shoavavim() {
    // January 1 2022 was Shabbos Vaera, inside the Shovavim weeks.
    assert!(diaspora(2021, 12, 28).is_shoavavim_week());
    // Mid-summer is not.
    assert!(!diaspora(2022, 7, 5).is_shoavavim_week());
}

#[test]
fn test_vesein_tal_umatar_in_israel() {
    // 7 Cheshvan 5783 = November 1 2022.
    assert!(israel(2022, 11, 1).is_vesein_tal_umatar_start_date());
    assert!(israel(2022, 10, 31).is_vesein_tal_umatar_starting_tonight());
    assert!(israel(2022, 11, 2).is_vesein_tal_umatar_recited());
    assert!(!israel(2022, 10, 30).is_vesein_tal_umatar_recited());
}

#[test]
fn test_tekufa_based_start_outside_israel() {
    // Outside Israel vesein tal umatar starts the night of December 4/5
    // (December 5/6 before a civil leap year).
    assert!(diaspora(2022, 12, 5).is_vesein_tal_umatar_start_date());
    assert!(diaspora(2022, 12, 4).is_vesein_tal_umatar_starting_tonight());
    assert!(!diaspora(2022, 12, 1).is_vesein_tal_umatar_recited());
    assert!(diaspora(2022, 12, 10).is_vesein_tal_umatar_recited());
}
