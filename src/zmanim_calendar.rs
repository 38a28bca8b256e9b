use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};

use crate::astronomical_calendar::AstronomicalCalendar;
use crate::constants::{GEOMETRIC_ZENITH, MINUTE_MILLIS, ZENITH_8_POINT_5, ZENITH_16_POINT_1};
use crate::geolocation::GeoLocation;
use crate::jewish_calendar::JewishCalendar;
use crate::jewish_date::JewishDate;
use crate::math::multiply_duration;
use crate::sun_times_calculator::{AstronomicalCalculatorTrait, SunTimesCalculator};

/// The base zmanim layer: day frames, shaos zmaniyos and the standard
/// GRA/MGA times. Every zman here reduces to one of two operations, a
/// degree offset from sunrise/sunset or a linear interpolation of the day
/// frame, and every one of them is `None` whenever a primitive it depends
/// on is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimCalendar<Tz: TimeZone, C: AstronomicalCalculatorTrait = SunTimesCalculator> {
    astronomical_calendar: AstronomicalCalendar<Tz, C>,
    /// When set, elevation-adjusted sunrise/sunset anchor the day frames;
    /// otherwise sea level is used throughout.
    pub use_elevation: bool,
    /// Prefer the astronomical transit for chatzos itself.
    pub use_astronomical_chatzos: bool,
    /// Derive shma/tfila/mincha from half-days around the astronomical
    /// chatzos instead of twelfths of the full frame.
    pub use_astronomical_chatzos_for_other_zmanim: bool,
    pub candle_lighting_offset: Duration,
    pub ateret_torah_sunset_offset: Duration,
}

impl<Tz: TimeZone> ZmanimCalendar<Tz, SunTimesCalculator> {
    pub fn new(date_time: DateTime<Tz>, geo_location: GeoLocation) -> Self {
        Self::with_calculator(AstronomicalCalendar::new(date_time, geo_location))
    }
}

impl ZmanimCalendar<chrono::FixedOffset, SunTimesCalculator> {
    /// Calendar for a civil date in the location's own fixed UTC offset.
    pub fn for_date(geo_location: GeoLocation, date: NaiveDate) -> Option<Self> {
        Some(Self::with_calculator(AstronomicalCalendar::for_date(geo_location, date)?))
    }
}

impl<Tz: TimeZone, C: AstronomicalCalculatorTrait> ZmanimCalendar<Tz, C> {
    pub fn with_calculator(astronomical_calendar: AstronomicalCalendar<Tz, C>) -> Self {
        Self {
            astronomical_calendar,
            use_elevation: false,
            use_astronomical_chatzos: true,
            use_astronomical_chatzos_for_other_zmanim: false,
            candle_lighting_offset: Duration::minutes(18),
            ateret_torah_sunset_offset: Duration::minutes(40),
        }
    }

    pub fn astronomical_calendar(&self) -> &AstronomicalCalendar<Tz, C> {
        &self.astronomical_calendar
    }

    /// Sunrise as the day-frame anchor, honoring the elevation setting.
    pub fn elevation_adjusted_sunrise(&self) -> Option<DateTime<Tz>> {
        if self.use_elevation {
            self.astronomical_calendar.sunrise()
        } else {
            self.astronomical_calendar.sea_level_sunrise()
        }
    }

    pub fn elevation_adjusted_sunset(&self) -> Option<DateTime<Tz>> {
        if self.use_elevation {
            self.astronomical_calendar.sunset()
        } else {
            self.astronomical_calendar.sea_level_sunset()
        }
    }

    /// Dawn at 16.1 degrees below the horizon, the Gra's 4-mil walk before
    /// sunrise.
    pub fn alos_hashachar(&self) -> Option<DateTime<Tz>> {
        self.astronomical_calendar.sunrise_offset_by_degrees(ZENITH_16_POINT_1)
    }

    /// Dawn fixed at 72 clock minutes before sunrise.
    pub fn alos_72(&self) -> Option<DateTime<Tz>> {
        Some(self.elevation_adjusted_sunrise()? - Duration::minutes(72))
    }

    /// Nightfall at 8.5 degrees, three medium stars.
    pub fn tzais(&self) -> Option<DateTime<Tz>> {
        self.astronomical_calendar.sunset_offset_by_degrees(ZENITH_8_POINT_5)
    }

    /// Rabbeinu Tam's 72 clock minutes after sunset.
    pub fn tzais_72(&self) -> Option<DateTime<Tz>> {
        Some(self.elevation_adjusted_sunset()? + Duration::minutes(72))
    }

    pub fn candle_lighting(&self) -> Option<DateTime<Tz>> {
        Some(self.astronomical_calendar.sea_level_sunset()? - self.candle_lighting_offset)
    }

    /// Halachic noon. With `use_astronomical_chatzos` this is the solar
    /// transit; otherwise the midpoint of the sunrise/sunset frame.
    pub fn chatzos(&self) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos {
            self.astronomical_calendar.sun_transit()
        } else {
            self.chatzos_as_half_day().or_else(|| self.astronomical_calendar.sun_transit())
        }
    }

    pub fn chatzos_as_half_day(&self) -> Option<DateTime<Tz>> {
        self.astronomical_calendar.sun_transit_from_times(
            &self.astronomical_calendar.sea_level_sunrise()?,
            &self.astronomical_calendar.sea_level_sunset()?,
        )
    }

    /// Solar midnight following this date's sunset.
    pub fn chatzos_layla(&self) -> Option<DateTime<Tz>> {
        self.astronomical_calendar.solar_midnight()
    }

    /// One twelfth of the sunrise-to-sunset day.
    pub fn shaah_zmanis_gra(&self) -> Option<Duration> {
        self.astronomical_calendar.temporal_hour_from_times(
            &self.elevation_adjusted_sunrise()?,
            &self.elevation_adjusted_sunset()?,
        )
    }

    /// One twelfth of the Magen Avraham's 72-minute day.
    pub fn shaah_zmanis_mga(&self) -> Option<Duration> {
        self.astronomical_calendar
            .temporal_hour_from_times(&self.alos_72()?, &self.tzais_72()?)
    }

    /// `start + hours` shaos zmaniyos of the (start, end) frame.
    pub fn shaah_zmanis_based_zman(
        &self,
        start_of_day: DateTime<Tz>,
        end_of_day: DateTime<Tz>,
        hours: f64,
    ) -> Option<DateTime<Tz>> {
        let shaah_zmanis = self
            .astronomical_calendar
            .temporal_hour_from_times(&start_of_day, &end_of_day)?;
        Some(start_of_day + multiply_duration(shaah_zmanis, hours))
    }

    /// A half-day is divided into six hours; negative hours count back
    /// from the end of the half-day.
    pub fn half_day_based_zman(
        &self,
        start_of_half_day: DateTime<Tz>,
        end_of_half_day: DateTime<Tz>,
        hours: f64,
    ) -> Option<DateTime<Tz>> {
        let shaah_zmanis = self.half_day_based_shaah_zmanis(&start_of_half_day, &end_of_half_day)?;
        if hours >= 0.0 {
            Some(start_of_half_day + multiply_duration(shaah_zmanis, hours))
        } else {
            Some(end_of_half_day + multiply_duration(shaah_zmanis, hours))
        }
    }

    pub fn half_day_based_shaah_zmanis(
        &self,
        start_of_half_day: &DateTime<Tz>,
        end_of_half_day: &DateTime<Tz>,
    ) -> Option<Duration> {
        Some((end_of_half_day.clone() - start_of_half_day) / 6)
    }

    /// How long a dawn or dusk at the given depression runs, as a fraction
    /// of a GRA shaah zmanis. Lets callers express "N degrees" opinions in
    /// zmaniyos minutes.
    pub fn percent_of_shaah_zmanis_from_degrees(&self, degrees: f64, sunset: bool) -> Option<f64> {
        let sea_level_sunrise = self.astronomical_calendar.sea_level_sunrise();
        let sea_level_sunset = self.astronomical_calendar.sea_level_sunset();
        let twilight = if sunset {
            self.astronomical_calendar
                .sunset_offset_by_degrees(GEOMETRIC_ZENITH + degrees)
        } else {
            self.astronomical_calendar
                .sunrise_offset_by_degrees(GEOMETRIC_ZENITH + degrees)
        };
        match (sea_level_sunrise, sea_level_sunset, twilight) {
            (Some(sunrise), Some(sunset_time), Some(twilight_time)) => {
                let shaah_zmanis =
                    (sunset_time.timestamp_millis() - sunrise.timestamp_millis()) as f64 / 12.0;
                let gap = if sunset {
                    twilight_time - sunset_time
                } else {
                    sunrise - twilight_time
                };
                Some(gap.num_milliseconds() as f64 / shaah_zmanis)
            }
            _ => None,
        }
    }

    /// Latest shma for a caller-supplied day frame: three shaos zmaniyos
    /// in. `synchronous` marks frames symmetric around chatzos, where the
    /// half-day form applies when configured.
    pub fn sof_zman_shma(
        &self,
        start_of_day: DateTime<Tz>,
        end_of_day: Option<DateTime<Tz>>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(start_of_day, self.chatzos()?, 3.0)
        } else {
            self.shaah_zmanis_based_zman(start_of_day, end_of_day?, 3.0)
        }
    }

    pub fn sof_zman_shma_gra(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_shma(
            self.elevation_adjusted_sunrise()?,
            self.elevation_adjusted_sunset(),
            true,
        )
    }

    pub fn sof_zman_shma_mga(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_shma(self.alos_72()?, self.tzais_72(), true)
    }

    pub fn sof_zman_tfila(
        &self,
        start_of_day: DateTime<Tz>,
        end_of_day: Option<DateTime<Tz>>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(start_of_day, self.chatzos()?, 4.0)
        } else {
            self.shaah_zmanis_based_zman(start_of_day, end_of_day?, 4.0)
        }
    }

    pub fn sof_zman_tfila_gra(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila(
            self.elevation_adjusted_sunrise()?,
            self.elevation_adjusted_sunset(),
            true,
        )
    }

    pub fn sof_zman_tfila_mga(&self) -> Option<DateTime<Tz>> {
        self.sof_zman_tfila(self.alos_72()?, self.tzais_72(), true)
    }

    pub fn mincha_gedola_from_times(
        &self,
        start_of_day: Option<DateTime<Tz>>,
        end_of_day: DateTime<Tz>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(self.chatzos()?, end_of_day, 0.5)
        } else {
            self.shaah_zmanis_based_zman(start_of_day?, end_of_day, 6.5)
        }
    }

    pub fn mincha_gedola(&self) -> Option<DateTime<Tz>> {
        self.mincha_gedola_from_times(
            self.elevation_adjusted_sunrise(),
            self.elevation_adjusted_sunset()?,
            true,
        )
    }

    pub fn samuch_le_mincha_ketana(
        &self,
        start_of_day: Option<DateTime<Tz>>,
        end_of_day: DateTime<Tz>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(self.chatzos()?, end_of_day, 3.0)
        } else {
            self.shaah_zmanis_based_zman(start_of_day?, end_of_day, 9.0)
        }
    }

    pub fn mincha_ketana_from_times(
        &self,
        start_of_day: Option<DateTime<Tz>>,
        end_of_day: DateTime<Tz>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(self.chatzos()?, end_of_day, 3.5)
        } else {
            self.shaah_zmanis_based_zman(start_of_day?, end_of_day, 9.5)
        }
    }

    pub fn mincha_ketana(&self) -> Option<DateTime<Tz>> {
        self.mincha_ketana_from_times(
            self.elevation_adjusted_sunrise(),
            self.elevation_adjusted_sunset()?,
            true,
        )
    }

    pub fn plag_hamincha_from_times(
        &self,
        start_of_day: Option<DateTime<Tz>>,
        end_of_day: DateTime<Tz>,
        synchronous: bool,
    ) -> Option<DateTime<Tz>> {
        if self.use_astronomical_chatzos_for_other_zmanim && synchronous {
            self.half_day_based_zman(self.chatzos()?, end_of_day, 4.75)
        } else {
            self.shaah_zmanis_based_zman(start_of_day?, end_of_day, 10.75)
        }
    }

    pub fn plag_hamincha(&self) -> Option<DateTime<Tz>> {
        self.plag_hamincha_from_times(
            self.elevation_adjusted_sunrise(),
            self.elevation_adjusted_sunset()?,
            true,
        )
    }

    pub(crate) fn jewish_calendar(&self) -> Option<JewishCalendar> {
        let date = JewishDate::from_date_time(self.astronomical_calendar.date_time()).ok()?;
        Some(JewishCalendar::new(date, false))
    }

    fn midnight_last_night(&self) -> Option<DateTime<Tz>> {
        self.astronomical_calendar
            .date_time()
            .with_hour(0)?
            .with_minute(0)?
            .with_second(0)?
            .with_nanosecond(0)
    }

    fn midnight_tonight(&self) -> Option<DateTime<Tz>> {
        Some(self.midnight_last_night()? + Duration::days(1))
    }

    /// Localizes a molad-derived instant and clamps it into the night.
    /// A time landing in daylight snaps to tzais (for a window opening)
    /// or alos (for a window closing); a time outside this civil day is
    /// discarded so a multi-day window reports on the right calendar day.
    fn molad_based_time(
        &self,
        molad_based_time: DateTime<Utc>,
        alos: &Option<DateTime<Tz>>,
        tzais: &Option<DateTime<Tz>>,
        techila: bool,
    ) -> Option<DateTime<Tz>> {
        let local = self
            .astronomical_calendar
            .date_time()
            .timezone()
            .from_utc_datetime(&molad_based_time.naive_utc());
        if local < self.midnight_last_night()? || local > self.midnight_tonight()? {
            return None;
        }
        match (alos, tzais) {
            (Some(alos), Some(tzais)) => {
                if local > *alos && local < *tzais {
                    if techila {
                        Some(tzais.clone())
                    } else {
                        Some(alos.clone())
                    }
                } else {
                    Some(local)
                }
            }
            _ => Some(local),
        }
    }

    /// Earliest kiddush levana (3 days), reported only on 1-5 or 30 of the
    /// month; on the 30th the next month's molad is consulted.
    pub fn tchilas_zman_kidush_levana_3_days(
        &self,
        alos: &Option<DateTime<Tz>>,
        tzais: &Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        let jewish_calendar = self.jewish_calendar()?;
        let day = jewish_calendar.jewish_date().jewish_day_of_month();
        if day > 5 && day < 30 {
            return None;
        }
        let zman =
            self.molad_based_time(jewish_calendar.tchilas_zman_kidush_levana_3_days().ok()?, alos, tzais, true);
        if zman.is_none() && day == 30 {
            let next_month = JewishCalendar::new(
                jewish_calendar
                    .jewish_date()
                    .forward(crate::jewish_date::CalendarUnit::Month, 1)
                    .ok()?,
                false,
            );
            return self.molad_based_time(
                next_month.tchilas_zman_kidush_levana_3_days().ok()?,
                alos,
                tzais,
                true,
            );
        }
        zman
    }

    /// Earliest kiddush levana (7 days), reported on 4-9 of the month.
    pub fn tchilas_zman_kidush_levana_7_days(
        &self,
        alos: &Option<DateTime<Tz>>,
        tzais: &Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        let jewish_calendar = self.jewish_calendar()?;
        let day = jewish_calendar.jewish_date().jewish_day_of_month();
        if !(4..=9).contains(&day) {
            return None;
        }
        self.molad_based_time(
            jewish_calendar.tchilas_zman_kidush_levana_7_days().ok()?,
            alos,
            tzais,
            true,
        )
    }

    /// Latest kiddush levana between the moldos, reported on 11-16.
    pub fn sof_zman_kidush_levana_between_moldos(
        &self,
        alos: &Option<DateTime<Tz>>,
        tzais: &Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        let jewish_calendar = self.jewish_calendar()?;
        let day = jewish_calendar.jewish_date().jewish_day_of_month();
        if !(11..=16).contains(&day) {
            return None;
        }
        self.molad_based_time(
            jewish_calendar.sof_zman_kidush_levana_between_moldos().ok()?,
            alos,
            tzais,
            false,
        )
    }

    /// Latest kiddush levana at 15 days, reported on 11-17.
    pub fn sof_zman_kidush_levana_15_days(
        &self,
        alos: &Option<DateTime<Tz>>,
        tzais: &Option<DateTime<Tz>>,
    ) -> Option<DateTime<Tz>> {
        let jewish_calendar = self.jewish_calendar()?;
        let day = jewish_calendar.jewish_date().jewish_day_of_month();
        if !(11..=17).contains(&day) {
            return None;
        }
        self.molad_based_time(
            jewish_calendar.sof_zman_kidush_levana_15_days().ok()?,
            alos,
            tzais,
            false,
        )
    }

    pub(crate) fn minute_millis_offset(
        &self,
        time: Option<DateTime<Tz>>,
        minutes: f64,
    ) -> Option<DateTime<Tz>> {
        Some(time? + Duration::milliseconds((minutes * MINUTE_MILLIS as f64) as i64))
    }
}
