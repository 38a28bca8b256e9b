pub mod astronomical_calendar;
pub mod complex_zmanim_calendar;
pub mod constants;
pub mod daf;
pub mod error;
pub mod geolocation;
pub mod hebrew_date_formatter;
pub mod jewish_calendar;
pub mod jewish_date;
pub mod math;
pub mod noaa_calculator;
pub mod parshas;
pub mod sun_times_calculator;
pub mod tefila_rules;
#[cfg(test)]
pub mod tests;
pub mod zmanim_calendar;

pub use astronomical_calendar::AstronomicalCalendar;
pub use complex_zmanim_calendar::ComplexZmanimCalendar;
pub use error::ZmanimError;
pub use geolocation::GeoLocation;
pub use jewish_calendar::JewishCalendar;
pub use jewish_date::JewishDate;
pub use sun_times_calculator::{AstronomicalCalculatorTrait, SunTimesCalculator};
pub use zmanim_calendar::ZmanimCalendar;
