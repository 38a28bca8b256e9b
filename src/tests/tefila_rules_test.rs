use proptest::prelude::*;

use crate::constants::{DayOfWeek, JewishMonth};
use crate::jewish_calendar::JewishCalendar;
use crate::jewish_date::JewishDate;
use crate::tefila_rules::TefilaRules;

fn diaspora(year: i32, month: u8, day: u8) -> JewishCalendar {
    JewishCalendar::from_gregorian_date(year, month, day, false).expect("valid date")
}

fn israel(year: i32, month: u8, day: u8) -> JewishCalendar {
    JewishCalendar::from_gregorian_date(year, month, day, true).expect("valid date")
}

#[test]
fn test_no_tachanun_on_festive_days() {
    let rules = TefilaRules::default();
    // Rosh Chodesh Iyar 5782, May 2 2022.
    assert!(!rules.is_tachanun_recited_shacharis(&diaspora(2022, 5, 2)));
    // All of Nissan.
    assert!(!rules.is_tachanun_recited_shacharis(&diaspora(2022, 4, 5)));
    // Chanukah.
    assert!(!rules.is_tachanun_recited_shacharis(&diaspora(2022, 12, 20)));
    // Tisha B'Av (nidche to August 7 2022... the 9th of Av observance).
    assert!(!rules.is_tachanun_recited_shacharis(&diaspora(2022, 8, 7)));
    // Isru chag after Shavuos (June 6 2022 diaspora is second day yom
    // tov; June 7 is isru chag).
    assert!(!rules.is_tachanun_recited_shacharis(&diaspora(2022, 6, 7)));
    // Yom Haatzmaut, observed May 5 2022.
    assert!(!rules.is_tachanun_recited_shacharis(&israel(2022, 5, 5)));
}

#[test]
fn test_tachanun_on_ordinary_weekday() {
    let rules = TefilaRules::default();
    // A plain Tuesday in Cheshvan, November 8 2022.
    assert!(rules.is_tachanun_recited_shacharis(&diaspora(2022, 11, 8)));
    assert!(rules.is_tachanun_recited_mincha(&diaspora(2022, 11, 8)));
}

#[test]
fn test_pesach_sheni_option() {
    // 14 Iyar 5782 = May 15 2022.
    let lenient = TefilaRules::default();
    assert!(!lenient.is_tachanun_recited_shacharis(&diaspora(2022, 5, 15)));
    let strict = TefilaRules {
        tachanun_recited_pesach_sheni: true,
        ..TefilaRules::default()
    };
    // With the option set, Pesach Sheni itself gets tachanun, subject to
    // the week-of-hod window also being enabled (it is by default).
    assert!(strict.is_tachanun_recited_shacharis(&diaspora(2022, 5, 15)));
}

#[test]
fn test_week_of_hod_option() {
    // 17 Iyar 5782 = May 18 2022, inside the 14-20 Iyar window.
    let blocking = TefilaRules {
        tachanun_recited_week_of_hod: false,
        ..TefilaRules::default()
    };
    assert!(!blocking.is_tachanun_recited_shacharis(&diaspora(2022, 5, 18)));
    assert!(TefilaRules::default().is_tachanun_recited_shacharis(&diaspora(2022, 5, 18)));
}

#[test]
fn test_fridays_and_sundays_options() {
    // Friday November 11 2022 and Sunday November 13 2022.
    let no_friday = TefilaRules {
        tachanun_recited_fridays: false,
        ..TefilaRules::default()
    };
    assert!(!no_friday.is_tachanun_recited_shacharis(&diaspora(2022, 11, 11)));
    let no_sunday = TefilaRules {
        tachanun_recited_sundays: false,
        ..TefilaRules::default()
    };
    assert!(!no_sunday.is_tachanun_recited_shacharis(&diaspora(2022, 11, 13)));
}

#[test]
fn test_mincha_suppressed_before_festive_day() {
    let rules = TefilaRules::default();
    // Erev Rosh Chodesh Kislev 5783: November 23 2022 is 29 Cheshvan;
    // mincha tachanun is omitted because tomorrow is Rosh Chodesh.
    assert!(!rules.is_tachanun_recited_mincha(&diaspora(2022, 11, 23)));
    // The global mincha switch.
    let no_mincha = TefilaRules {
        tachanun_recited_mincha_all_year: false,
        ..TefilaRules::default()
    };
    assert!(!no_mincha.is_tachanun_recited_mincha(&diaspora(2022, 11, 8)));
}

#[test]
fn test_end_of_tishrei_option() {
    // 25 Tishrei 5783 = October 20 2022.
    assert!(TefilaRules::default().is_tachanun_recited_shacharis(&diaspora(2022, 10, 20)));
    let silent = TefilaRules {
        tachanun_recited_end_of_tishrei: false,
        ..TefilaRules::default()
    };
    assert!(!silent.is_tachanun_recited_shacharis(&diaspora(2022, 10, 20)));
}

#[test]
fn test_hallel() {
    let rules = TefilaRules::default();
    // Full hallel on the first day of Pesach.
    assert!(rules.is_hallel_recited(&diaspora(2022, 4, 16)));
    assert!(rules.is_hallel_shalem_recited(&diaspora(2022, 4, 16)));
    // Half hallel on the last days.
    assert!(rules.is_hallel_recited(&diaspora(2022, 4, 20)));
    assert!(!rules.is_hallel_shalem_recited(&diaspora(2022, 4, 20)));
    // Rosh Chodesh gets half hallel; Chanukah gets full.
    assert!(!rules.is_hallel_shalem_recited(&diaspora(2022, 5, 2)));
    assert!(rules.is_hallel_shalem_recited(&diaspora(2022, 12, 20)));
    // An ordinary day gets none.
    assert!(!rules.is_hallel_recited(&diaspora(2022, 11, 8)));
}

#[test]
fn test_al_hanissim_and_yaaleh_veyavo() {
    let rules = TefilaRules::default();
    assert!(rules.is_al_hanissim_recited(&diaspora(2022, 12, 20)));
    assert!(rules.is_al_hanissim_recited(&diaspora(2022, 3, 17)));
    assert!(!rules.is_al_hanissim_recited(&diaspora(2022, 11, 8)));
    assert!(rules.is_yaaleh_veyavo_recited(&diaspora(2022, 5, 2)));
    assert!(!rules.is_yaaleh_veyavo_recited(&diaspora(2022, 11, 8)));
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::default() })]
    /// Tachanun is never recited on a Shabbos, no matter the options.
    #[test]
    fn prop_no_tachanun_on_shabbos(
        year in 5700i32..=5850,
        month_num in 1u8..=13,
        day in 1u8..=30,
        end_of_tishrei in any::<bool>(),
        week_after_shavuos in any::<bool>(),
        pesach_sheni in any::<bool>(),
        week_of_hod in any::<bool>(),
        fridays in any::<bool>(),
        sundays in any::<bool>(),
    ) {
        let month = JewishMonth::try_from(month_num).expect("in range");
        prop_assume!(month != JewishMonth::AdarII || JewishDate::is_jewish_leap_year(year));
        prop_assume!(day <= JewishDate::days_in_jewish_month(year, month));
        let date = JewishDate::from_jewish_date(year, month, day).expect("valid");
        prop_assume!(date.day_of_week() == DayOfWeek::Shabbos);

        let rules = TefilaRules {
            tachanun_recited_end_of_tishrei: end_of_tishrei,
            tachanun_recited_week_after_shavuos: week_after_shavuos,
            tachanun_recited_pesach_sheni: pesach_sheni,
            tachanun_recited_week_of_hod: week_of_hod,
            tachanun_recited_fridays: fridays,
            tachanun_recited_sundays: sundays,
            ..TefilaRules::default()
        };
        let calendar = JewishCalendar::new(date, false);
        prop_assert!(!rules.is_tachanun_recited_shacharis(&calendar));
    }
}
