//! Weekly parsha assignment tables.
//!
//! The reading for a Shabbos is fully determined by the year's keviah (Rosh
//! Hashanah weekday, Cheshvan/Kislev lengths, leap status) and whether the
//! calendar follows the Israel or diaspora cycle. That gives seventeen year
//! configurations, each with a fixed per-week table indexed by the week
//! number from Rosh Hashanah. `None` marks a Shabbos that is yom tov or chol
//! hamoed, where no weekly portion is read.

use crate::constants::Parsha;

/// Looks up the parsha for a (year configuration, week) pair.
pub(crate) fn parsha_for_week(year_type: u8, week: usize) -> Option<Parsha> {
    let table: &[Option<Parsha>] = match year_type {
        0 => &PARSHA_TABLE_0,
        1 => &PARSHA_TABLE_1,
        2 => &PARSHA_TABLE_2,
        3 => &PARSHA_TABLE_3,
        4 => &PARSHA_TABLE_4,
        5 => &PARSHA_TABLE_5,
        6 => &PARSHA_TABLE_6,
        7 => &PARSHA_TABLE_7,
        8 => &PARSHA_TABLE_8,
        9 => &PARSHA_TABLE_9,
        10 => &PARSHA_TABLE_10,
        11 => &PARSHA_TABLE_11,
        12 => &PARSHA_TABLE_12,
        13 => &PARSHA_TABLE_13,
        14 => &PARSHA_TABLE_14,
        15 => &PARSHA_TABLE_15,
        16 => &PARSHA_TABLE_16,
        _ => return None,
    };
    table.get(week).copied().flatten()
}

pub(crate) static PARSHA_TABLE_0: [Option<Parsha>; 51] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), None, Some(Parsha::Shmini), Some(Parsha::TazriaMetzora),
    Some(Parsha::AchreiMosKedoshim), Some(Parsha::Emor), Some(Parsha::BeharBechukosai),
    Some(Parsha::Bamidbar), Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach),
    Some(Parsha::Korach), Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas),
    Some(Parsha::MatosMasei), Some(Parsha::Devarim), Some(Parsha::Vaeschanan),
    Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim), Some(Parsha::KiSeitzei),
    Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_1: [Option<Parsha>; 51] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), None, Some(Parsha::Shmini), Some(Parsha::TazriaMetzora),
    Some(Parsha::AchreiMosKedoshim), Some(Parsha::Emor), Some(Parsha::BeharBechukosai),
    Some(Parsha::Bamidbar), None, Some(Parsha::Nasso), Some(Parsha::Behaaloscha),
    Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::ChukasBalak), Some(Parsha::Pinchas),
    Some(Parsha::MatosMasei), Some(Parsha::Devarim), Some(Parsha::Vaeschanan),
    Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim), Some(Parsha::KiSeitzei),
    Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_2: [Option<Parsha>; 52] = [
    None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav), None, None,
    Some(Parsha::Shmini), Some(Parsha::TazriaMetzora), Some(Parsha::AchreiMosKedoshim),
    Some(Parsha::Emor), Some(Parsha::BeharBechukosai), Some(Parsha::Bamidbar),
    Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_3: [Option<Parsha>; 52] = [
    None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    None, Some(Parsha::Shmini), Some(Parsha::TazriaMetzora), Some(Parsha::AchreiMosKedoshim),
    Some(Parsha::Emor), Some(Parsha::BeharBechukosai), Some(Parsha::Bamidbar),
    Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_4: [Option<Parsha>; 52] = [
    None, None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav), None,
    Some(Parsha::Shmini), Some(Parsha::TazriaMetzora), Some(Parsha::AchreiMosKedoshim),
    Some(Parsha::Emor), Some(Parsha::BeharBechukosai), Some(Parsha::Bamidbar),
    Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_5: [Option<Parsha>; 52] = [
    None, None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav), None,
    Some(Parsha::Shmini), Some(Parsha::TazriaMetzora), Some(Parsha::AchreiMosKedoshim),
    Some(Parsha::Emor), Some(Parsha::BeharBechukosai), Some(Parsha::Bamidbar),
    Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo),
    Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_6: [Option<Parsha>; 55] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), None, Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::ChukasBalak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo),
    Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_7: [Option<Parsha>; 56] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    None, Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor),
    Some(Parsha::Behar), Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei), Some(Parsha::Devarim),
    Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim),
    Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_8: [Option<Parsha>; 56] = [
    None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), Some(Parsha::AchreiMos),
    None, Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::Matos), Some(Parsha::Masei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_9: [Option<Parsha>; 56] = [
    None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), Some(Parsha::AchreiMos),
    None, Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::Matos), Some(Parsha::Masei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo),
    Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_10: [Option<Parsha>; 56] = [
    None, None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei), Some(Parsha::Devarim),
    Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim),
    Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_11: [Option<Parsha>; 56] = [
    None, None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), None, Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::ChukasBalak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo),
    Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_12: [Option<Parsha>; 51] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), None, Some(Parsha::Shmini), Some(Parsha::TazriaMetzora),
    Some(Parsha::AchreiMosKedoshim), Some(Parsha::Emor), Some(Parsha::BeharBechukosai),
    Some(Parsha::Bamidbar), Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach),
    Some(Parsha::Korach), Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas),
    Some(Parsha::MatosMasei), Some(Parsha::Devarim), Some(Parsha::Vaeschanan),
    Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim), Some(Parsha::KiSeitzei),
    Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_13: [Option<Parsha>; 52] = [
    None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::VayakhelPekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav), None,
    Some(Parsha::Shmini), Some(Parsha::TazriaMetzora), Some(Parsha::AchreiMosKedoshim),
    Some(Parsha::Emor), Some(Parsha::BeharBechukosai), Some(Parsha::Bamidbar),
    Some(Parsha::Nasso), Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach),
    Some(Parsha::Chukas), Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::Matos),
    Some(Parsha::Masei), Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev),
    Some(Parsha::Reeh), Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo),
    Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_14: [Option<Parsha>; 55] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei), Some(Parsha::Devarim),
    Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim),
    Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
pub(crate) static PARSHA_TABLE_15: [Option<Parsha>; 56] = [
    None, Some(Parsha::Vayeilech), Some(Parsha::HaAzinu), None, Some(Parsha::Bereshis),
    Some(Parsha::Noach), Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara),
    Some(Parsha::Toldos), Some(Parsha::Vayetzei), Some(Parsha::Vayishlach),
    Some(Parsha::Vayeshev), Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi),
    Some(Parsha::Shemos), Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach),
    Some(Parsha::Yisro), Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh),
    Some(Parsha::KiSisa), Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra),
    Some(Parsha::Tzav), Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::Matos), Some(Parsha::Masei),
    Some(Parsha::Devarim), Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh),
    Some(Parsha::Shoftim), Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::Nitzavim),
];
pub(crate) static PARSHA_TABLE_16: [Option<Parsha>; 56] = [
    None, None, Some(Parsha::HaAzinu), None, None, Some(Parsha::Bereshis), Some(Parsha::Noach),
    Some(Parsha::LechLecha), Some(Parsha::Vayera), Some(Parsha::ChayeiSara), Some(Parsha::Toldos),
    Some(Parsha::Vayetzei), Some(Parsha::Vayishlach), Some(Parsha::Vayeshev),
    Some(Parsha::Miketz), Some(Parsha::Vayigash), Some(Parsha::Vayechi), Some(Parsha::Shemos),
    Some(Parsha::Vaera), Some(Parsha::Bo), Some(Parsha::Beshalach), Some(Parsha::Yisro),
    Some(Parsha::Mishpatim), Some(Parsha::Terumah), Some(Parsha::Tetzaveh), Some(Parsha::KiSisa),
    Some(Parsha::Vayakhel), Some(Parsha::Pekudei), Some(Parsha::Vayikra), Some(Parsha::Tzav),
    Some(Parsha::Shmini), Some(Parsha::Tazria), Some(Parsha::Metzora), None,
    Some(Parsha::AchreiMos), Some(Parsha::Kedoshim), Some(Parsha::Emor), Some(Parsha::Behar),
    Some(Parsha::Bechukosai), Some(Parsha::Bamidbar), Some(Parsha::Nasso),
    Some(Parsha::Behaaloscha), Some(Parsha::Shlach), Some(Parsha::Korach), Some(Parsha::Chukas),
    Some(Parsha::Balak), Some(Parsha::Pinchas), Some(Parsha::MatosMasei), Some(Parsha::Devarim),
    Some(Parsha::Vaeschanan), Some(Parsha::Eikev), Some(Parsha::Reeh), Some(Parsha::Shoftim),
    Some(Parsha::KiSeitzei), Some(Parsha::KiSavo), Some(Parsha::NitzavimVayeilech),
];
