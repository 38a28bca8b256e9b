use num_enum::{IntoPrimitive, TryFromPrimitive};

// Astronomical constants shared by the calculators.
pub const GEOMETRIC_ZENITH: f64 = 90.0;
pub const CIVIL_ZENITH: f64 = 96.0;
pub const NAUTICAL_ZENITH: f64 = 102.0;
pub const ASTRONOMICAL_ZENITH: f64 = 108.0;
/// Apparent solar radius in degrees (16 arcminutes).
pub const SOLAR_RADIUS: f64 = 16.0 / 60.0;
/// Average atmospheric refraction at the horizon in degrees (34 arcminutes).
pub const REFRACTION: f64 = 34.0 / 60.0;
/// Earth radius in kilometers, used for the elevation zenith adjustment.
pub const EARTH_RADIUS_KM: f64 = 6356.9;
pub(crate) const JULIAN_DAY_JAN_1_2000: f64 = 2451545.0;
pub(crate) const JULIAN_DAYS_PER_CENTURY: f64 = 36525.0;

// Named zenith angles for the various zmanim opinions, all measured from
// the vertical, so 90 + N is N degrees below the horizon.
pub const ZENITH_1_POINT_583: f64 = GEOMETRIC_ZENITH + 1.583;
pub const ZENITH_3_POINT_65: f64 = GEOMETRIC_ZENITH + 3.65;
pub const ZENITH_3_POINT_676: f64 = GEOMETRIC_ZENITH + 3.676;
pub const ZENITH_3_POINT_7: f64 = GEOMETRIC_ZENITH + 3.7;
pub const ZENITH_3_POINT_8: f64 = GEOMETRIC_ZENITH + 3.8;
pub const ZENITH_4_POINT_37: f64 = GEOMETRIC_ZENITH + 4.37;
pub const ZENITH_4_POINT_61: f64 = GEOMETRIC_ZENITH + 4.61;
pub const ZENITH_4_POINT_8: f64 = GEOMETRIC_ZENITH + 4.8;
pub const ZENITH_5_POINT_88: f64 = GEOMETRIC_ZENITH + 5.88;
pub const ZENITH_5_POINT_95: f64 = GEOMETRIC_ZENITH + 5.95;
pub const ZENITH_6_DEGREES: f64 = GEOMETRIC_ZENITH + 6.0;
pub const ZENITH_6_POINT_45: f64 = GEOMETRIC_ZENITH + 6.45;
pub const ZENITH_7_POINT_083: f64 = GEOMETRIC_ZENITH + 7.0 + 5.0 / 60.0;
pub const ZENITH_7_POINT_65: f64 = GEOMETRIC_ZENITH + 7.65;
pub const ZENITH_7_POINT_67: f64 = GEOMETRIC_ZENITH + 7.67;
pub const ZENITH_8_POINT_5: f64 = GEOMETRIC_ZENITH + 8.5;
pub const ZENITH_9_POINT_3: f64 = GEOMETRIC_ZENITH + 9.3;
pub const ZENITH_9_POINT_5: f64 = GEOMETRIC_ZENITH + 9.5;
pub const ZENITH_9_POINT_75: f64 = GEOMETRIC_ZENITH + 9.75;
pub const ZENITH_10_POINT_2: f64 = GEOMETRIC_ZENITH + 10.2;
pub const ZENITH_11_DEGREES: f64 = GEOMETRIC_ZENITH + 11.0;
pub const ZENITH_11_POINT_5: f64 = GEOMETRIC_ZENITH + 11.5;
pub const ZENITH_13_POINT_24: f64 = GEOMETRIC_ZENITH + 13.24;
pub const ZENITH_16_POINT_1: f64 = GEOMETRIC_ZENITH + 16.1;
pub const ZENITH_16_POINT_9: f64 = GEOMETRIC_ZENITH + 16.9;
pub const ZENITH_18_DEGREES: f64 = GEOMETRIC_ZENITH + 18.0;
pub const ZENITH_19_DEGREES: f64 = GEOMETRIC_ZENITH + 19.0;
pub const ZENITH_19_POINT_8: f64 = GEOMETRIC_ZENITH + 19.8;
pub const ZENITH_26_DEGREES: f64 = GEOMETRIC_ZENITH + 26.0;
// The Yereim's bain hashmashos starts while the sun is still above the
// horizon, so these sit below the geometric zenith.
pub const ZENITH_MINUS_2_POINT_1: f64 = GEOMETRIC_ZENITH - 2.1;
pub const ZENITH_MINUS_2_POINT_8: f64 = GEOMETRIC_ZENITH - 2.8;
pub const ZENITH_MINUS_3_POINT_05: f64 = GEOMETRIC_ZENITH - 3.05;

// Calendrical constants. A chelek is 1/1080 of an hour (3 1/3 seconds).
pub(crate) const CHALAKIM_PER_MINUTE: i64 = 18;
pub(crate) const CHALAKIM_PER_HOUR: i64 = 1080;
pub(crate) const CHALAKIM_PER_DAY: i64 = 25920;
/// One synodic month: 29 days, 12 hours and 793 chalakim.
pub(crate) const CHALAKIM_PER_MONTH: i64 = 765433;
/// Molad BaHaRaD: day 2, 5 hours and 204 chalakim from the start of day 1.
pub(crate) const CHALAKIM_MOLAD_TOHU: i64 = 31524;
/// Day 1 of the Hebrew calendar on the absolute-day axis where civil
/// 1 January 1 (proleptic Gregorian) is day 1.
pub(crate) const JEWISH_EPOCH: i64 = -1373429;

pub(crate) const MINUTE_MILLIS: i64 = 60 * 1000;

// Daf yomi cycle anchors as unix millis (midnight UTC).
/// 1923-09-11, the first day of the first Bavli cycle.
pub(crate) const BAVLI_CYCLE_START_MILLIS: i64 = -1461369600000;
/// 1975-06-24, the start of cycle 8 when Shekalim grew from 13 to 22 daf.
pub(crate) const BAVLI_SHEKALIM_CHANGE_MILLIS: i64 = 172800000000;
/// 1980-02-02, the first day of the first Yerushalmi cycle.
pub(crate) const YERUSHALMI_CYCLE_START_MILLIS: i64 = 318297600000;
pub(crate) const YERUSHALMI_CYCLE_DAYS: u64 = 1554;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum SolarEvent {
    Sunrise,
    Sunset,
    Noon,
    Midnight,
}

/// Hebrew months numbered from Nissan, following the scriptural ordering.
/// In a leap year `Adar` is Adar I and `AdarII` follows it; in a common
/// year `Adar` is the only Adar and `AdarII` is invalid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum JewishMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl JewishMonth {
    pub fn en_string(&self, is_leap_year: bool) -> &str {
        match self {
            JewishMonth::Nissan => "Nissan",
            JewishMonth::Iyar => "Iyar",
            JewishMonth::Sivan => "Sivan",
            JewishMonth::Tammuz => "Tammuz",
            JewishMonth::Av => "Av",
            JewishMonth::Elul => "Elul",
            JewishMonth::Tishrei => "Tishrei",
            JewishMonth::Cheshvan => "Cheshvan",
            JewishMonth::Kislev => "Kislev",
            JewishMonth::Teves => "Teves",
            JewishMonth::Shevat => "Shevat",
            JewishMonth::Adar => {
                if is_leap_year {
                    "Adar I"
                } else {
                    "Adar"
                }
            }
            JewishMonth::AdarII => "Adar II",
        }
    }

    pub fn he_string(&self, is_leap_year: bool) -> &str {
        match self {
            JewishMonth::Nissan => "ניסן",
            JewishMonth::Iyar => "אייר",
            JewishMonth::Sivan => "סיון",
            JewishMonth::Tammuz => "תמוז",
            JewishMonth::Av => "אב",
            JewishMonth::Elul => "אלול",
            JewishMonth::Tishrei => "תשרי",
            JewishMonth::Cheshvan => "חשון",
            JewishMonth::Kislev => "כסלו",
            JewishMonth::Teves => "טבת",
            JewishMonth::Shevat => "שבט",
            JewishMonth::Adar => {
                if is_leap_year {
                    "אדר א"
                } else {
                    "אדר"
                }
            }
            JewishMonth::AdarII => "אדר ב",
        }
    }
}

/// Day of week with Sunday = 1, the ordering used throughout the Hebrew
/// calendar arithmetic.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum DayOfWeek {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Shabbos = 7,
}

impl DayOfWeek {
    pub fn en_string(&self) -> &str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Shabbos => "Shabbos",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            DayOfWeek::Sunday => "ראשון",
            DayOfWeek::Monday => "שני",
            DayOfWeek::Tuesday => "שלישי",
            DayOfWeek::Wednesday => "רביעי",
            DayOfWeek::Thursday => "חמישי",
            DayOfWeek::Friday => "שישי",
            DayOfWeek::Shabbos => "שבת",
        }
    }
}

/// The kviah of a year: whether Cheshvan and Kislev are both short, in
/// order, or both full.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum YearLengthType {
    Chaserim = 0,
    Kesidran = 1,
    Shelaimim = 2,
}

impl YearLengthType {
    pub fn en_string(&self) -> &str {
        match self {
            YearLengthType::Chaserim => "Chaserim",
            YearLengthType::Kesidran => "Kesidran",
            YearLengthType::Shelaimim => "Shelaimim",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            YearLengthType::Chaserim => "חסרים",
            YearLengthType::Kesidran => "כסדרן",
            YearLengthType::Shelaimim => "שלמים",
        }
    }
}

/// Holidays, fasts and notable days identified by the calendar. The
/// discriminants are stable and exposed for formatters.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum JewishHoliday {
    ErevPesach = 0,
    Pesach = 1,
    CholHamoedPesach = 2,
    PesachSheni = 3,
    ErevShavuos = 4,
    Shavuos = 5,
    SeventeenthOfTammuz = 6,
    TishaBeav = 7,
    TuBeav = 8,
    ErevRoshHashana = 9,
    RoshHashana = 10,
    FastOfGedalyah = 11,
    ErevYomKippur = 12,
    YomKippur = 13,
    ErevSuccos = 14,
    Succos = 15,
    CholHamoedSuccos = 16,
    HoshanaRabbah = 17,
    SheminiAtzeres = 18,
    SimchasTorah = 19,
    Chanukah = 20,
    TenthOfTeves = 21,
    TuBishvat = 22,
    FastOfEsther = 23,
    Purim = 24,
    ShushanPurim = 25,
    PurimKatan = 26,
    ShushanPurimKatan = 27,
    YomHaShoah = 28,
    YomHazikaron = 29,
    YomHaatzmaut = 30,
    YomYerushalayim = 31,
    LagBaomer = 32,
    IsruChag = 33,
}

impl JewishHoliday {
    pub fn en_string(&self) -> &str {
        match self {
            JewishHoliday::ErevPesach => "Erev Pesach",
            JewishHoliday::Pesach => "Pesach",
            JewishHoliday::CholHamoedPesach => "Chol Hamoed Pesach",
            JewishHoliday::PesachSheni => "Pesach Sheni",
            JewishHoliday::ErevShavuos => "Erev Shavuos",
            JewishHoliday::Shavuos => "Shavuos",
            JewishHoliday::SeventeenthOfTammuz => "Seventeenth of Tammuz",
            JewishHoliday::TishaBeav => "Tisha B'Av",
            JewishHoliday::TuBeav => "Tu B'Av",
            JewishHoliday::ErevRoshHashana => "Erev Rosh Hashana",
            JewishHoliday::RoshHashana => "Rosh Hashana",
            JewishHoliday::FastOfGedalyah => "Fast of Gedalyah",
            JewishHoliday::ErevYomKippur => "Erev Yom Kippur",
            JewishHoliday::YomKippur => "Yom Kippur",
            JewishHoliday::ErevSuccos => "Erev Succos",
            JewishHoliday::Succos => "Succos",
            JewishHoliday::CholHamoedSuccos => "Chol Hamoed Succos",
            JewishHoliday::HoshanaRabbah => "Hoshana Rabbah",
            JewishHoliday::SheminiAtzeres => "Shemini Atzeres",
            JewishHoliday::SimchasTorah => "Simchas Torah",
            JewishHoliday::Chanukah => "Chanukah",
            JewishHoliday::TenthOfTeves => "Tenth of Teves",
            JewishHoliday::TuBishvat => "Tu B'Shvat",
            JewishHoliday::FastOfEsther => "Fast of Esther",
            JewishHoliday::Purim => "Purim",
            JewishHoliday::ShushanPurim => "Shushan Purim",
            JewishHoliday::PurimKatan => "Purim Katan",
            JewishHoliday::ShushanPurimKatan => "Shushan Purim Katan",
            JewishHoliday::YomHaShoah => "Yom HaShoah",
            JewishHoliday::YomHazikaron => "Yom Hazikaron",
            JewishHoliday::YomHaatzmaut => "Yom Ha'atzmaut",
            JewishHoliday::YomYerushalayim => "Yom Yerushalayim",
            JewishHoliday::LagBaomer => "Lag B'Omer",
            JewishHoliday::IsruChag => "Isru Chag",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            JewishHoliday::ErevPesach => "ערב פסח",
            JewishHoliday::Pesach => "פסח",
            JewishHoliday::CholHamoedPesach => "חול המועד פסח",
            JewishHoliday::PesachSheni => "פסח שני",
            JewishHoliday::ErevShavuos => "ערב שבועות",
            JewishHoliday::Shavuos => "שבועות",
            JewishHoliday::SeventeenthOfTammuz => "שבעה עשר בתמוז",
            JewishHoliday::TishaBeav => "תשעה באב",
            JewishHoliday::TuBeav => "ט״ו באב",
            JewishHoliday::ErevRoshHashana => "ערב ראש השנה",
            JewishHoliday::RoshHashana => "ראש השנה",
            JewishHoliday::FastOfGedalyah => "צום גדליה",
            JewishHoliday::ErevYomKippur => "ערב יום כיפור",
            JewishHoliday::YomKippur => "יום כיפור",
            JewishHoliday::ErevSuccos => "ערב סוכות",
            JewishHoliday::Succos => "סוכות",
            JewishHoliday::CholHamoedSuccos => "חול המועד סוכות",
            JewishHoliday::HoshanaRabbah => "הושענא רבה",
            JewishHoliday::SheminiAtzeres => "שמיני עצרת",
            JewishHoliday::SimchasTorah => "שמחת תורה",
            JewishHoliday::Chanukah => "חנוכה",
            JewishHoliday::TenthOfTeves => "עשרה בטבת",
            JewishHoliday::TuBishvat => "ט״ו בשבט",
            JewishHoliday::FastOfEsther => "תענית אסתר",
            JewishHoliday::Purim => "פורים",
            JewishHoliday::ShushanPurim => "שושן פורים",
            JewishHoliday::PurimKatan => "פורים קטן",
            JewishHoliday::ShushanPurimKatan => "שושן פורים קטן",
            JewishHoliday::YomHaShoah => "יום השואה",
            JewishHoliday::YomHazikaron => "יום הזיכרון",
            JewishHoliday::YomHaatzmaut => "יום העצמאות",
            JewishHoliday::YomYerushalayim => "יום ירושלים",
            JewishHoliday::LagBaomer => "ל״ג בעומר",
            JewishHoliday::IsruChag => "אסרו חג",
        }
    }
}

/// The 54 weekly portions, the seven doubled portions, and the special
/// shabbosos reported as overlays.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Parsha {
    Bereshis = 0,
    Noach = 1,
    LechLecha = 2,
    Vayera = 3,
    ChayeiSara = 4,
    Toldos = 5,
    Vayetzei = 6,
    Vayishlach = 7,
    Vayeshev = 8,
    Miketz = 9,
    Vayigash = 10,
    Vayechi = 11,
    Shemos = 12,
    Vaera = 13,
    Bo = 14,
    Beshalach = 15,
    Yisro = 16,
    Mishpatim = 17,
    Terumah = 18,
    Tetzaveh = 19,
    KiSisa = 20,
    Vayakhel = 21,
    Pekudei = 22,
    Vayikra = 23,
    Tzav = 24,
    Shmini = 25,
    Tazria = 26,
    Metzora = 27,
    AchreiMos = 28,
    Kedoshim = 29,
    Emor = 30,
    Behar = 31,
    Bechukosai = 32,
    Bamidbar = 33,
    Nasso = 34,
    Behaaloscha = 35,
    Shlach = 36,
    Korach = 37,
    Chukas = 38,
    Balak = 39,
    Pinchas = 40,
    Matos = 41,
    Masei = 42,
    Devarim = 43,
    Vaeschanan = 44,
    Eikev = 45,
    Reeh = 46,
    Shoftim = 47,
    KiSeitzei = 48,
    KiSavo = 49,
    Nitzavim = 50,
    Vayeilech = 51,
    HaAzinu = 52,
    VezosHabracha = 53,
    VayakhelPekudei = 54,
    TazriaMetzora = 55,
    AchreiMosKedoshim = 56,
    BeharBechukosai = 57,
    ChukasBalak = 58,
    MatosMasei = 59,
    NitzavimVayeilech = 60,
    Shekalim = 61,
    Zachor = 62,
    Parah = 63,
    Hachodesh = 64,
    Shuva = 65,
    Shira = 66,
    Hagadol = 67,
    Chazon = 68,
    Nachamu = 69,
}

impl Parsha {
    pub fn en_string(&self) -> &str {
        match self {
            Parsha::Bereshis => "Bereshis",
            Parsha::Noach => "Noach",
            Parsha::LechLecha => "Lech Lecha",
            Parsha::Vayera => "Vayera",
            Parsha::ChayeiSara => "Chayei Sara",
            Parsha::Toldos => "Toldos",
            Parsha::Vayetzei => "Vayetzei",
            Parsha::Vayishlach => "Vayishlach",
            Parsha::Vayeshev => "Vayeshev",
            Parsha::Miketz => "Miketz",
            Parsha::Vayigash => "Vayigash",
            Parsha::Vayechi => "Vayechi",
            Parsha::Shemos => "Shemos",
            Parsha::Vaera => "Vaera",
            Parsha::Bo => "Bo",
            Parsha::Beshalach => "Beshalach",
            Parsha::Yisro => "Yisro",
            Parsha::Mishpatim => "Mishpatim",
            Parsha::Terumah => "Terumah",
            Parsha::Tetzaveh => "Tetzaveh",
            Parsha::KiSisa => "Ki Sisa",
            Parsha::Vayakhel => "Vayakhel",
            Parsha::Pekudei => "Pekudei",
            Parsha::Vayikra => "Vayikra",
            Parsha::Tzav => "Tzav",
            Parsha::Shmini => "Shmini",
            Parsha::Tazria => "Tazria",
            Parsha::Metzora => "Metzora",
            Parsha::AchreiMos => "Achrei Mos",
            Parsha::Kedoshim => "Kedoshim",
            Parsha::Emor => "Emor",
            Parsha::Behar => "Behar",
            Parsha::Bechukosai => "Bechukosai",
            Parsha::Bamidbar => "Bamidbar",
            Parsha::Nasso => "Nasso",
            Parsha::Behaaloscha => "Beha'aloscha",
            Parsha::Shlach => "Sh'lach",
            Parsha::Korach => "Korach",
            Parsha::Chukas => "Chukas",
            Parsha::Balak => "Balak",
            Parsha::Pinchas => "Pinchas",
            Parsha::Matos => "Matos",
            Parsha::Masei => "Masei",
            Parsha::Devarim => "Devarim",
            Parsha::Vaeschanan => "Vaeschanan",
            Parsha::Eikev => "Eikev",
            Parsha::Reeh => "Re'eh",
            Parsha::Shoftim => "Shoftim",
            Parsha::KiSeitzei => "Ki Seitzei",
            Parsha::KiSavo => "Ki Savo",
            Parsha::Nitzavim => "Nitzavim",
            Parsha::Vayeilech => "Vayeilech",
            Parsha::HaAzinu => "Ha'Azinu",
            Parsha::VezosHabracha => "Vezos Habracha",
            Parsha::VayakhelPekudei => "Vayakhel Pekudei",
            Parsha::TazriaMetzora => "Tazria Metzora",
            Parsha::AchreiMosKedoshim => "Achrei Mos Kedoshim",
            Parsha::BeharBechukosai => "Behar Bechukosai",
            Parsha::ChukasBalak => "Chukas Balak",
            Parsha::MatosMasei => "Matos Masei",
            Parsha::NitzavimVayeilech => "Nitzavim Vayeilech",
            Parsha::Shekalim => "Shekalim",
            Parsha::Zachor => "Zachor",
            Parsha::Parah => "Parah",
            Parsha::Hachodesh => "Hachodesh",
            Parsha::Shuva => "Shuva",
            Parsha::Shira => "Shira",
            Parsha::Hagadol => "Hagadol",
            Parsha::Chazon => "Chazon",
            Parsha::Nachamu => "Nachamu",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            Parsha::Bereshis => "בראשית",
            Parsha::Noach => "נח",
            Parsha::LechLecha => "לך לך",
            Parsha::Vayera => "וירא",
            Parsha::ChayeiSara => "חיי שרה",
            Parsha::Toldos => "תולדות",
            Parsha::Vayetzei => "ויצא",
            Parsha::Vayishlach => "וישלח",
            Parsha::Vayeshev => "וישב",
            Parsha::Miketz => "מקץ",
            Parsha::Vayigash => "ויגש",
            Parsha::Vayechi => "ויחי",
            Parsha::Shemos => "שמות",
            Parsha::Vaera => "וארא",
            Parsha::Bo => "בא",
            Parsha::Beshalach => "בשלח",
            Parsha::Yisro => "יתרו",
            Parsha::Mishpatim => "משפטים",
            Parsha::Terumah => "תרומה",
            Parsha::Tetzaveh => "תצוה",
            Parsha::KiSisa => "כי תשא",
            Parsha::Vayakhel => "ויקהל",
            Parsha::Pekudei => "פקודי",
            Parsha::Vayikra => "ויקרא",
            Parsha::Tzav => "צו",
            Parsha::Shmini => "שמיני",
            Parsha::Tazria => "תזריע",
            Parsha::Metzora => "מצרע",
            Parsha::AchreiMos => "אחרי מות",
            Parsha::Kedoshim => "קדושים",
            Parsha::Emor => "אמור",
            Parsha::Behar => "בהר",
            Parsha::Bechukosai => "בחקתי",
            Parsha::Bamidbar => "במדבר",
            Parsha::Nasso => "נשא",
            Parsha::Behaaloscha => "בהעלתך",
            Parsha::Shlach => "שלח לך",
            Parsha::Korach => "קרח",
            Parsha::Chukas => "חוקת",
            Parsha::Balak => "בלק",
            Parsha::Pinchas => "פינחס",
            Parsha::Matos => "מטות",
            Parsha::Masei => "מסעי",
            Parsha::Devarim => "דברים",
            Parsha::Vaeschanan => "ואתחנן",
            Parsha::Eikev => "עקב",
            Parsha::Reeh => "ראה",
            Parsha::Shoftim => "שופטים",
            Parsha::KiSeitzei => "כי תצא",
            Parsha::KiSavo => "כי תבוא",
            Parsha::Nitzavim => "נצבים",
            Parsha::Vayeilech => "וילך",
            Parsha::HaAzinu => "האזינו",
            Parsha::VezosHabracha => "וזאת הברכה",
            Parsha::VayakhelPekudei => "ויקהל פקודי",
            Parsha::TazriaMetzora => "תזריע מצרע",
            Parsha::AchreiMosKedoshim => "אחרי מות קדושים",
            Parsha::BeharBechukosai => "בהר בחקתי",
            Parsha::ChukasBalak => "חוקת בלק",
            Parsha::MatosMasei => "מטות מסעי",
            Parsha::NitzavimVayeilech => "נצבים וילך",
            Parsha::Shekalim => "שקלים",
            Parsha::Zachor => "זכור",
            Parsha::Parah => "פרה",
            Parsha::Hachodesh => "החדש",
            Parsha::Shuva => "שובה",
            Parsha::Shira => "שירה",
            Parsha::Hagadol => "הגדול",
            Parsha::Chazon => "חזון",
            Parsha::Nachamu => "נחמו",
        }
    }
}

/// The 40 tractates of the Babylonian Talmud in daf yomi order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BavliTractate {
    Berachos = 0,
    Shabbos = 1,
    Eruvin = 2,
    Pesachim = 3,
    Shekalim = 4,
    Yoma = 5,
    Sukkah = 6,
    Beitzah = 7,
    RoshHashana = 8,
    Taanis = 9,
    Megillah = 10,
    MoedKatan = 11,
    Chagigah = 12,
    Yevamos = 13,
    Kesubos = 14,
    Nedarim = 15,
    Nazir = 16,
    Sotah = 17,
    Gitin = 18,
    Kiddushin = 19,
    BavaKamma = 20,
    BavaMetzia = 21,
    BavaBasra = 22,
    Sanhedrin = 23,
    Makkos = 24,
    Shevuos = 25,
    AvodahZarah = 26,
    Horiyos = 27,
    Zevachim = 28,
    Menachos = 29,
    Chullin = 30,
    Bechoros = 31,
    Arachin = 32,
    Temurah = 33,
    Kerisos = 34,
    Meilah = 35,
    Kinnim = 36,
    Tamid = 37,
    Midos = 38,
    Niddah = 39,
}

impl BavliTractate {
    pub fn en_string(&self) -> &str {
        match self {
            BavliTractate::Berachos => "Berachos",
            BavliTractate::Shabbos => "Shabbos",
            BavliTractate::Eruvin => "Eruvin",
            BavliTractate::Pesachim => "Pesachim",
            BavliTractate::Shekalim => "Shekalim",
            BavliTractate::Yoma => "Yoma",
            BavliTractate::Sukkah => "Sukkah",
            BavliTractate::Beitzah => "Beitzah",
            BavliTractate::RoshHashana => "Rosh Hashana",
            BavliTractate::Taanis => "Taanis",
            BavliTractate::Megillah => "Megillah",
            BavliTractate::MoedKatan => "Moed Katan",
            BavliTractate::Chagigah => "Chagigah",
            BavliTractate::Yevamos => "Yevamos",
            BavliTractate::Kesubos => "Kesubos",
            BavliTractate::Nedarim => "Nedarim",
            BavliTractate::Nazir => "Nazir",
            BavliTractate::Sotah => "Sotah",
            BavliTractate::Gitin => "Gitin",
            BavliTractate::Kiddushin => "Kiddushin",
            BavliTractate::BavaKamma => "Bava Kamma",
            BavliTractate::BavaMetzia => "Bava Metzia",
            BavliTractate::BavaBasra => "Bava Basra",
            BavliTractate::Sanhedrin => "Sanhedrin",
            BavliTractate::Makkos => "Makkos",
            BavliTractate::Shevuos => "Shevuos",
            BavliTractate::AvodahZarah => "Avodah Zarah",
            BavliTractate::Horiyos => "Horiyos",
            BavliTractate::Zevachim => "Zevachim",
            BavliTractate::Menachos => "Menachos",
            BavliTractate::Chullin => "Chullin",
            BavliTractate::Bechoros => "Bechoros",
            BavliTractate::Arachin => "Arachin",
            BavliTractate::Temurah => "Temurah",
            BavliTractate::Kerisos => "Kerisos",
            BavliTractate::Meilah => "Meilah",
            BavliTractate::Kinnim => "Kinnim",
            BavliTractate::Tamid => "Tamid",
            BavliTractate::Midos => "Midos",
            BavliTractate::Niddah => "Niddah",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            BavliTractate::Berachos => "ברכות",
            BavliTractate::Shabbos => "שבת",
            BavliTractate::Eruvin => "עירובין",
            BavliTractate::Pesachim => "פסחים",
            BavliTractate::Shekalim => "שקלים",
            BavliTractate::Yoma => "יומא",
            BavliTractate::Sukkah => "סוכה",
            BavliTractate::Beitzah => "ביצה",
            BavliTractate::RoshHashana => "ראש השנה",
            BavliTractate::Taanis => "תענית",
            BavliTractate::Megillah => "מגילה",
            BavliTractate::MoedKatan => "מועד קטן",
            BavliTractate::Chagigah => "חגיגה",
            BavliTractate::Yevamos => "יבמות",
            BavliTractate::Kesubos => "כתובות",
            BavliTractate::Nedarim => "נדרים",
            BavliTractate::Nazir => "נזיר",
            BavliTractate::Sotah => "סוטה",
            BavliTractate::Gitin => "גיטין",
            BavliTractate::Kiddushin => "קידושין",
            BavliTractate::BavaKamma => "בבא קמא",
            BavliTractate::BavaMetzia => "בבא מציעא",
            BavliTractate::BavaBasra => "בבא בתרא",
            BavliTractate::Sanhedrin => "סנהדרין",
            BavliTractate::Makkos => "מכות",
            BavliTractate::Shevuos => "שבועות",
            BavliTractate::AvodahZarah => "עבודה זרה",
            BavliTractate::Horiyos => "הוריות",
            BavliTractate::Zevachim => "זבחים",
            BavliTractate::Menachos => "מנחות",
            BavliTractate::Chullin => "חולין",
            BavliTractate::Bechoros => "בכורות",
            BavliTractate::Arachin => "ערכין",
            BavliTractate::Temurah => "תמורה",
            BavliTractate::Kerisos => "כריתות",
            BavliTractate::Meilah => "מעילה",
            BavliTractate::Kinnim => "קינים",
            BavliTractate::Tamid => "תמיד",
            BavliTractate::Midos => "מידות",
            BavliTractate::Niddah => "נדה",
        }
    }
}

/// The 39 tractates of the Jerusalem Talmud in daf yomi order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum YerushalmiTractate {
    Berachos = 0,
    Peah = 1,
    Demai = 2,
    Kilayim = 3,
    Sheviis = 4,
    Terumos = 5,
    Maasros = 6,
    MaaserSheni = 7,
    Chalah = 8,
    Orlah = 9,
    Bikurim = 10,
    Shabbos = 11,
    Eruvin = 12,
    Pesachim = 13,
    Beitzah = 14,
    RoshHashanah = 15,
    Yoma = 16,
    Sukah = 17,
    Taanis = 18,
    Shekalim = 19,
    Megilah = 20,
    Chagigah = 21,
    MoedKatan = 22,
    Yevamos = 23,
    Kesuvos = 24,
    Sotah = 25,
    Nedarim = 26,
    Nazir = 27,
    Gitin = 28,
    Kidushin = 29,
    BavaKama = 30,
    BavaMetzia = 31,
    BavaBasra = 32,
    Shevuos = 33,
    Makos = 34,
    Sanhedrin = 35,
    AvodahZarah = 36,
    Horayos = 37,
    Nidah = 38,
    /// Sentinel for days with no daf (Yom Kippur and Tisha B'Av).
    NoDaf = 39,
}

impl YerushalmiTractate {
    pub fn en_string(&self) -> &str {
        match self {
            YerushalmiTractate::Berachos => "Berachos",
            YerushalmiTractate::Peah => "Pe'ah",
            YerushalmiTractate::Demai => "Demai",
            YerushalmiTractate::Kilayim => "Kilayim",
            YerushalmiTractate::Sheviis => "Shevi'is",
            YerushalmiTractate::Terumos => "Terumos",
            YerushalmiTractate::Maasros => "Ma'asros",
            YerushalmiTractate::MaaserSheni => "Ma'aser Sheni",
            YerushalmiTractate::Chalah => "Chalah",
            YerushalmiTractate::Orlah => "Orlah",
            YerushalmiTractate::Bikurim => "Bikurim",
            YerushalmiTractate::Shabbos => "Shabbos",
            YerushalmiTractate::Eruvin => "Eruvin",
            YerushalmiTractate::Pesachim => "Pesachim",
            YerushalmiTractate::Beitzah => "Beitzah",
            YerushalmiTractate::RoshHashanah => "Rosh Hashanah",
            YerushalmiTractate::Yoma => "Yoma",
            YerushalmiTractate::Sukah => "Sukah",
            YerushalmiTractate::Taanis => "Ta'anis",
            YerushalmiTractate::Shekalim => "Shekalim",
            YerushalmiTractate::Megilah => "Megilah",
            YerushalmiTractate::Chagigah => "Chagigah",
            YerushalmiTractate::MoedKatan => "Moed Katan",
            YerushalmiTractate::Yevamos => "Yevamos",
            YerushalmiTractate::Kesuvos => "Kesuvos",
            YerushalmiTractate::Sotah => "Sotah",
            YerushalmiTractate::Nedarim => "Nedarim",
            YerushalmiTractate::Nazir => "Nazir",
            YerushalmiTractate::Gitin => "Gitin",
            YerushalmiTractate::Kidushin => "Kidushin",
            YerushalmiTractate::BavaKama => "Bava Kama",
            YerushalmiTractate::BavaMetzia => "Bava Metzia",
            YerushalmiTractate::BavaBasra => "Bava Basra",
            YerushalmiTractate::Shevuos => "Shevuos",
            YerushalmiTractate::Makos => "Makos",
            YerushalmiTractate::Sanhedrin => "Sanhedrin",
            YerushalmiTractate::AvodahZarah => "Avodah Zarah",
            YerushalmiTractate::Horayos => "Horayos",
            YerushalmiTractate::Nidah => "Nidah",
            YerushalmiTractate::NoDaf => "No Daf Today",
        }
    }

    pub fn he_string(&self) -> &str {
        match self {
            YerushalmiTractate::Berachos => "ברכות",
            YerushalmiTractate::Peah => "פיאה",
            YerushalmiTractate::Demai => "דמאי",
            YerushalmiTractate::Kilayim => "כלאים",
            YerushalmiTractate::Sheviis => "שביעית",
            YerushalmiTractate::Terumos => "תרומות",
            YerushalmiTractate::Maasros => "מעשרות",
            YerushalmiTractate::MaaserSheni => "מעשר שני",
            YerushalmiTractate::Chalah => "חלה",
            YerushalmiTractate::Orlah => "עורלה",
            YerushalmiTractate::Bikurim => "ביכורים",
            YerushalmiTractate::Shabbos => "שבת",
            YerushalmiTractate::Eruvin => "עירובין",
            YerushalmiTractate::Pesachim => "פסחים",
            YerushalmiTractate::Beitzah => "ביצה",
            YerushalmiTractate::RoshHashanah => "ראש השנה",
            YerushalmiTractate::Yoma => "יומא",
            YerushalmiTractate::Sukah => "סוכה",
            YerushalmiTractate::Taanis => "תענית",
            YerushalmiTractate::Shekalim => "שקלים",
            YerushalmiTractate::Megilah => "מגילה",
            YerushalmiTractate::Chagigah => "חגיגה",
            YerushalmiTractate::MoedKatan => "מועד קטן",
            YerushalmiTractate::Yevamos => "יבמות",
            YerushalmiTractate::Kesuvos => "כתובות",
            YerushalmiTractate::Sotah => "סוטה",
            YerushalmiTractate::Nedarim => "נדרים",
            YerushalmiTractate::Nazir => "נזיר",
            YerushalmiTractate::Gitin => "גיטין",
            YerushalmiTractate::Kidushin => "קידושין",
            YerushalmiTractate::BavaKama => "בבא קמא",
            YerushalmiTractate::BavaMetzia => "בבא מציעא",
            YerushalmiTractate::BavaBasra => "בבא בתרא",
            YerushalmiTractate::Shevuos => "שבועות",
            YerushalmiTractate::Makos => "מכות",
            YerushalmiTractate::Sanhedrin => "סנהדרין",
            YerushalmiTractate::AvodahZarah => "עבודה זרה",
            YerushalmiTractate::Horayos => "הוריות",
            YerushalmiTractate::Nidah => "נידה",
            YerushalmiTractate::NoDaf => "אין דף היום",
        }
    }
}
