use crate::constants::{DayOfWeek, JewishHoliday, Parsha, YearLengthType};
use crate::daf::{BavliDaf, YerushalmiDaf};
use crate::jewish_date::{JewishDate, MoladData};

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Renders the calendar's data objects as display strings. Three
/// orthogonal toggles: Hebrew vs transliterated English output, geresh and
/// gershayim punctuation inside Hebrew numerals, and long-form Hebrew
/// years that carry the thousands letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HebrewDateFormatter {
    pub hebrew_format: bool,
    pub use_geresh_gershayim: bool,
    pub use_long_hebrew_years: bool,
}

impl HebrewDateFormatter {
    pub fn new() -> Self {
        Self {
            hebrew_format: false,
            use_geresh_gershayim: true,
            use_long_hebrew_years: false,
        }
    }

    /// Renders 0-9999 as Hebrew letters (or digits in English mode).
    /// Fifteen and sixteen avoid spelling the divine name, and the
    /// thousands digit appears only in long-year mode.
    pub fn format_hebrew_number(&self, number: i64) -> String {
        debug_assert!((0..=9999).contains(&number));
        if !self.hebrew_format {
            return number.to_string();
        }
        if number == 0 {
            return "אפס".to_owned();
        }

        static ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
        static TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
        static HUNDREDS: [&str; 5] = ["", "ק", "ר", "ש", "ת"];

        let thousands = number / 1000;
        let mut remainder = number % 1000;
        let mut body = String::new();

        let mut hundreds_count = remainder / 100;
        remainder %= 100;
        while hundreds_count > 4 {
            body.push_str(HUNDREDS[4]);
            hundreds_count -= 4;
        }
        body.push_str(HUNDREDS[hundreds_count as usize]);

        // Avoid spelling yud-hei and yud-vav.
        if remainder == 15 {
            body.push_str("טו");
        } else if remainder == 16 {
            body.push_str("טז");
        } else {
            body.push_str(TENS[(remainder / 10) as usize]);
            body.push_str(ONES[(remainder % 10) as usize]);
        }

        if self.use_geresh_gershayim && !body.is_empty() {
            let mut chars: Vec<char> = body.chars().collect();
            if chars.len() == 1 {
                chars.push(GERESH);
            } else {
                // Gershayim goes before the last letter.
                chars.insert(chars.len() - 1, GERSHAYIM);
            }
            body = chars.into_iter().collect();
        }

        let mut result = String::new();
        if thousands > 0 && self.use_long_hebrew_years {
            result.push_str(ONES[thousands as usize]);
            if self.use_geresh_gershayim {
                result.push(GERESH);
            }
            if !body.is_empty() {
                result.push(' ');
            }
        }
        result.push_str(&body);
        result
    }

    pub fn format_month(&self, jewish_date: &JewishDate) -> String {
        let month = jewish_date.jewish_month();
        if self.hebrew_format {
            month.he_string(jewish_date.is_leap_year()).to_owned()
        } else {
            month.en_string(jewish_date.is_leap_year()).to_owned()
        }
    }

    pub fn format_day_of_week(&self, day_of_week: DayOfWeek) -> String {
        if self.hebrew_format {
            format!("יום {}", day_of_week.he_string())
        } else {
            day_of_week.en_string().to_owned()
        }
    }

    /// "21 Shevat, 5729" or "כ״א שבט תשכ״ט".
    pub fn format(&self, jewish_date: &JewishDate) -> String {
        if self.hebrew_format {
            format!(
                "{} {} {}",
                self.format_hebrew_number(jewish_date.jewish_day_of_month() as i64),
                self.format_month(jewish_date),
                self.format_hebrew_number(jewish_date.jewish_year() as i64)
            )
        } else {
            format!(
                "{} {}, {}",
                jewish_date.jewish_day_of_month(),
                self.format_month(jewish_date),
                jewish_date.jewish_year()
            )
        }
    }

    pub fn format_yom_tov(&self, holiday: JewishHoliday) -> String {
        if self.hebrew_format {
            holiday.he_string().to_owned()
        } else {
            holiday.en_string().to_owned()
        }
    }

    pub fn format_parsha(&self, parsha: Parsha) -> String {
        if self.hebrew_format {
            parsha.he_string().to_owned()
        } else {
            parsha.en_string().to_owned()
        }
    }

    pub fn format_kviah(&self, year_length_type: YearLengthType) -> String {
        if self.hebrew_format {
            year_length_type.he_string().to_owned()
        } else {
            year_length_type.en_string().to_owned()
        }
    }

    pub fn format_daf_yomi_bavli(&self, daf: &BavliDaf) -> String {
        if self.hebrew_format {
            format!("{} {}", daf.tractate.he_string(), self.format_hebrew_number(daf.page))
        } else {
            format!("{} {}", daf.tractate.en_string(), daf.page)
        }
    }

    pub fn format_daf_yomi_yerushalmi(&self, daf: &YerushalmiDaf) -> String {
        if self.hebrew_format {
            if daf.page == 0 {
                daf.tractate.he_string().to_owned()
            } else {
                format!("{} {}", daf.tractate.he_string(), self.format_hebrew_number(daf.page))
            }
        } else if daf.page == 0 {
            daf.tractate.en_string().to_owned()
        } else {
            format!("{} {}", daf.tractate.en_string(), daf.page)
        }
    }

    /// "46 minutes, 1 chelek" style molad rendering.
    pub fn format_molad(&self, molad: &MoladData) -> String {
        format!(
            "{}:{:02} and {} chalakim",
            molad.hours, molad.minutes, molad.chalakim
        )
    }

    pub fn format_omer(&self, day_of_omer: u8) -> String {
        if self.hebrew_format {
            format!("{} בעומר", self.format_hebrew_number(day_of_omer as i64))
        } else {
            format!("Omer {}", day_of_omer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::JewishMonth;

    fn hebrew() -> HebrewDateFormatter {
        HebrewDateFormatter {
            hebrew_format: true,
            use_geresh_gershayim: true,
            use_long_hebrew_years: false,
        }
    }

    #[test]
    fn test_hebrew_numbers() {
        let f = hebrew();
        assert_eq!(f.format_hebrew_number(1), "א׳");
        assert_eq!(f.format_hebrew_number(15), "ט״ו");
        assert_eq!(f.format_hebrew_number(16), "ט״ז");
        assert_eq!(f.format_hebrew_number(21), "כ״א");
        assert_eq!(f.format_hebrew_number(782), "תשפ״ב");
        assert_eq!(f.format_hebrew_number(5782), "תשפ״ב");
    }

    #[test]
    fn test_long_year_carries_thousands() {
        let f = HebrewDateFormatter {
            hebrew_format: true,
            use_geresh_gershayim: true,
            use_long_hebrew_years: true,
        };
        assert_eq!(f.format_hebrew_number(5782), "ה׳ תשפ״ב");
    }

    #[test]
    fn test_no_punctuation_mode() {
        let f = HebrewDateFormatter {
            hebrew_format: true,
            use_geresh_gershayim: false,
            use_long_hebrew_years: false,
        };
        assert_eq!(f.format_hebrew_number(5782), "תשפב");
        assert_eq!(f.format_hebrew_number(15), "טו");
    }

    #[test]
    fn test_english_format() {
        let f = HebrewDateFormatter::new();
        let date = JewishDate::from_jewish_date(5782, JewishMonth::Nissan, 15).expect("valid");
        assert_eq!(f.format(&date), "15 Nissan, 5782");
        assert_eq!(f.format_hebrew_number(5782), "5782");
    }

    #[test]
    fn test_hebrew_date_format() {
        let f = hebrew();
        let date = JewishDate::from_jewish_date(5782, JewishMonth::Nissan, 15).expect("valid");
        assert_eq!(f.format(&date), "ט״ו ניסן תשפ״ב");
    }

    #[test]
    fn test_adar_naming_follows_leap_status() {
        let f = HebrewDateFormatter::new();
        let common = JewishDate::from_jewish_date(5783, JewishMonth::Adar, 1).expect("valid");
        assert_eq!(f.format_month(&common), "Adar");
        let leap = JewishDate::from_jewish_date(5784, JewishMonth::Adar, 1).expect("valid");
        assert_eq!(f.format_month(&leap), "Adar I");
    }
}
