use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::constants::{
    ASTRONOMICAL_ZENITH, CIVIL_ZENITH, GEOMETRIC_ZENITH, NAUTICAL_ZENITH, SolarEvent,
};
use crate::geolocation::GeoLocation;
use crate::sun_times_calculator::{AstronomicalCalculatorTrait, SunTimesCalculator};

/// Binds a location and a civil date to a solar calculator and exposes the
/// astronomical day: sunrise, sunset, twilights, temporal hours and solar
/// transit. Only the date portion of `date_time` participates in the
/// calculations.
///
/// Any `None` from the calculator propagates; a zman derived from an
/// undefined primitive is itself undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct AstronomicalCalendar<Tz: TimeZone, C: AstronomicalCalculatorTrait = SunTimesCalculator> {
    date_time: DateTime<Tz>,
    geo_location: GeoLocation,
    calculator: C,
}

/// Adds signed milliseconds to an optional instant, propagating `None`.
pub fn time_offset<Tz: TimeZone>(
    time: Option<DateTime<Tz>>,
    offset_millis: i64,
) -> Option<DateTime<Tz>> {
    Some(time? + Duration::milliseconds(offset_millis))
}

impl<Tz: TimeZone> AstronomicalCalendar<Tz, SunTimesCalculator> {
    pub fn new(date_time: DateTime<Tz>, geo_location: GeoLocation) -> Self {
        Self::with_calculator(date_time, geo_location, SunTimesCalculator)
    }
}

impl AstronomicalCalendar<chrono::FixedOffset, SunTimesCalculator> {
    /// Calendar for a civil date in the location's own fixed UTC offset.
    pub fn for_date(geo_location: GeoLocation, date: NaiveDate) -> Option<Self> {
        let offset = geo_location.fixed_offset();
        let date_time = date.and_hms_opt(0, 0, 0)?.and_local_timezone(offset).single()?;
        Some(Self::new(date_time, geo_location))
    }
}

impl<Tz: TimeZone, C: AstronomicalCalculatorTrait> AstronomicalCalendar<Tz, C> {
    pub fn with_calculator(date_time: DateTime<Tz>, geo_location: GeoLocation, calculator: C) -> Self {
        Self {
            date_time,
            geo_location,
            calculator,
        }
    }

    pub fn date_time(&self) -> &DateTime<Tz> {
        &self.date_time
    }

    pub fn geo_location(&self) -> &GeoLocation {
        &self.geo_location
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// The date handed to the solar calculator, shifted a day when the
    /// location's clock sits on the far side of the antimeridian.
    fn adjusted_date_time(&self) -> Option<DateTime<Tz>> {
        let offset = self.geo_location.antimeridian_adjustment();
        if offset == 0 {
            Some(self.date_time.clone())
        } else if offset > 0 {
            self.date_time.clone().checked_add_days(Days::new(offset.unsigned_abs()))
        } else {
            self.date_time.clone().checked_sub_days(Days::new(offset.unsigned_abs()))
        }
    }

    /// Sunrise corrected for refraction, solar radius and the location's
    /// elevation.
    pub fn sunrise(&self) -> Option<DateTime<Tz>> {
        let utc = self.utc_sunrise(GEOMETRIC_ZENITH)?;
        self.date_from_time(utc, SolarEvent::Sunrise)
    }

    /// Sunrise at sea level. All twilight-by-depression zmanim are based on
    /// this, since the light level at dawn and dusk does not depend on the
    /// observer's elevation.
    pub fn sea_level_sunrise(&self) -> Option<DateTime<Tz>> {
        let utc = self.utc_sea_level_sunrise(GEOMETRIC_ZENITH)?;
        self.date_from_time(utc, SolarEvent::Sunrise)
    }

    pub fn sunset(&self) -> Option<DateTime<Tz>> {
        let utc = self.utc_sunset(GEOMETRIC_ZENITH)?;
        self.date_from_time(utc, SolarEvent::Sunset)
    }

    pub fn sea_level_sunset(&self) -> Option<DateTime<Tz>> {
        let utc = self.utc_sea_level_sunset(GEOMETRIC_ZENITH)?;
        self.date_from_time(utc, SolarEvent::Sunset)
    }

    /// The start of morning twilight at an arbitrary zenith, measured from
    /// sea level.
    pub fn sunrise_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Tz>> {
        let utc = self.utc_sea_level_sunrise(offset_zenith)?;
        self.date_from_time(utc, SolarEvent::Sunrise)
    }

    /// The end of evening twilight at an arbitrary zenith, measured from
    /// sea level.
    pub fn sunset_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Tz>> {
        let utc = self.utc_sea_level_sunset(offset_zenith)?;
        self.date_from_time(utc, SolarEvent::Sunset)
    }

    pub fn begin_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(CIVIL_ZENITH)
    }

    pub fn begin_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(NAUTICAL_ZENITH)
    }

    pub fn begin_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunrise_offset_by_degrees(ASTRONOMICAL_ZENITH)
    }

    pub fn end_civil_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(CIVIL_ZENITH)
    }

    pub fn end_nautical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(NAUTICAL_ZENITH)
    }

    pub fn end_astronomical_twilight(&self) -> Option<DateTime<Tz>> {
        self.sunset_offset_by_degrees(ASTRONOMICAL_ZENITH)
    }

    pub fn utc_sunrise(&self, zenith: f64) -> Option<f64> {
        self.calculator
            .get_utc_sunrise(&self.adjusted_date_time()?, &self.geo_location, zenith, true)
    }

    pub fn utc_sea_level_sunrise(&self, zenith: f64) -> Option<f64> {
        self.calculator
            .get_utc_sunrise(&self.adjusted_date_time()?, &self.geo_location, zenith, false)
    }

    pub fn utc_sunset(&self, zenith: f64) -> Option<f64> {
        self.calculator
            .get_utc_sunset(&self.adjusted_date_time()?, &self.geo_location, zenith, true)
    }

    pub fn utc_sea_level_sunset(&self, zenith: f64) -> Option<f64> {
        self.calculator
            .get_utc_sunset(&self.adjusted_date_time()?, &self.geo_location, zenith, false)
    }

    /// A twelfth of the sea-level day.
    pub fn temporal_hour(&self) -> Option<Duration> {
        self.temporal_hour_from_times(&self.sea_level_sunrise()?, &self.sea_level_sunset()?)
    }

    /// A twelfth of an arbitrary day frame.
    pub fn temporal_hour_from_times(
        &self,
        start_of_day: &DateTime<Tz>,
        end_of_day: &DateTime<Tz>,
    ) -> Option<Duration> {
        Some((end_of_day.clone() - start_of_day) / 12)
    }

    /// Solar transit (halachic noon) from the calculator.
    pub fn sun_transit(&self) -> Option<DateTime<Tz>> {
        let noon = self
            .calculator
            .get_utc_noon(&self.adjusted_date_time()?, &self.geo_location)?;
        self.date_from_time(noon, SolarEvent::Noon)
    }

    /// Transit of an arbitrary day frame: six temporal hours in.
    pub fn sun_transit_from_times(
        &self,
        start_of_day: &DateTime<Tz>,
        end_of_day: &DateTime<Tz>,
    ) -> Option<DateTime<Tz>> {
        let temporal_hour = self.temporal_hour_from_times(start_of_day, end_of_day)?;
        Some(start_of_day.clone() + temporal_hour * 6)
    }

    /// Solar midnight ("chatzos layla"): six night temporal hours past
    /// sunset, where the night runs from today's sunset to tomorrow's
    /// sunrise.
    pub fn solar_midnight(&self) -> Option<DateTime<Tz>> {
        let sunset = self.sea_level_sunset()?;
        let tomorrow = Self::with_calculator(
            self.date_time.clone().checked_add_days(Days::new(1))?,
            self.geo_location.clone(),
            self.calculator.clone(),
        );
        let next_sunrise = tomorrow.sea_level_sunrise()?;
        let night_hour = self.temporal_hour_from_times(&sunset, &next_sunrise)?;
        Some(sunset + night_hour * 6)
    }

    /// Converts a fractional UTC hour into an instant on the calendar's
    /// date, pulling the result into the previous or next civil day when
    /// the event lands across the date line from the location's clock.
    fn date_from_time(&self, calculated_time: f64, event: SolarEvent) -> Option<DateTime<Tz>> {
        if calculated_time.is_nan() {
            return None;
        }
        let adjusted = self.adjusted_date_time()?;
        let mut cal = Utc
            .with_ymd_and_hms(adjusted.year(), adjusted.month(), adjusted.day(), 0, 0, 0)
            .single()?;

        let mut remainder = calculated_time;
        let hours = remainder as i64;
        remainder = (remainder - hours as f64) * 60.0;
        let minutes = remainder as i64;
        remainder = (remainder - minutes as f64) * 60.0;
        let seconds = remainder as i64;
        remainder -= seconds as f64;

        let local_time_hours = (self.geo_location.longitude() / 15.0) as i64;
        match event {
            SolarEvent::Sunrise if local_time_hours + hours > 18 => {
                cal = cal.checked_sub_days(Days::new(1))?;
            }
            SolarEvent::Sunset if local_time_hours + hours < 6 => {
                cal = cal.checked_add_days(Days::new(1))?;
            }
            SolarEvent::Midnight if local_time_hours + hours < 12 => {
                cal = cal.checked_add_days(Days::new(1))?;
            }
            SolarEvent::Noon if local_time_hours + hours > 24 => {
                cal = cal.checked_sub_days(Days::new(1))?;
            }
            _ => {}
        }

        cal = cal.checked_add_signed(
            TimeDelta::hours(hours)
                + TimeDelta::minutes(minutes)
                + TimeDelta::seconds(seconds)
                + TimeDelta::nanoseconds((remainder * 1_000_000_000.0) as i64),
        )?;
        Some(self.date_time.timezone().from_utc_datetime(&cal.naive_utc()))
    }

    /// The instant when local mean time reaches the given fractional hour,
    /// e.g. 12.0 for fixed local chatzos.
    pub fn local_mean_time(&self, hours: f64) -> Option<DateTime<Tz>> {
        if !(0.0..24.0).contains(&hours) {
            return None;
        }
        let zone_offset_hours = self.geo_location.utc_offset_minutes() as f64 / 60.0;
        let standard = self.date_from_time(hours - zone_offset_hours, SolarEvent::Sunrise)?;
        Some(standard - self.geo_location.local_mean_time_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn jerusalem_on(date: (i32, u32, u32)) -> AstronomicalCalendar<chrono::FixedOffset> {
        let geo = GeoLocation::new("Jerusalem", 31.778, 35.2354, 0.0, 180).expect("valid");
        AstronomicalCalendar::for_date(geo, NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid"))
            .expect("valid")
    }

    #[test]
    fn test_sunset_after_sunrise() {
        let cal = jerusalem_on((2022, 4, 22));
        let sunrise = cal.sunrise().expect("defined");
        let sunset = cal.sunset().expect("defined");
        assert!(sunset > sunrise);
    }

    #[test]
    fn test_civil_twilight_brackets_the_day() {
        let cal = jerusalem_on((2022, 4, 22));
        assert!(cal.begin_civil_twilight().expect("defined") <= cal.sea_level_sunrise().expect("defined"));
        assert!(cal.end_civil_twilight().expect("defined") >= cal.sea_level_sunset().expect("defined"));
    }

    #[test]
    fn test_twilight_ordering() {
        let cal = jerusalem_on((2022, 10, 10));
        let astro = cal.begin_astronomical_twilight().expect("defined");
        let nautical = cal.begin_nautical_twilight().expect("defined");
        let civil = cal.begin_civil_twilight().expect("defined");
        assert!(astro < nautical && nautical < civil);
    }

    #[test]
    fn test_temporal_hour_times_twelve_spans_the_day() {
        let cal = jerusalem_on((2022, 7, 1));
        let sunrise = cal.sea_level_sunrise().expect("defined");
        let sunset = cal.sea_level_sunset().expect("defined");
        let hour = cal.temporal_hour().expect("defined");
        let gap = sunset - sunrise.clone();
        assert!((hour * 12 - gap).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn test_sun_transit_from_times_is_midday() {
        let cal = jerusalem_on((2022, 7, 1));
        let sunrise = cal.sea_level_sunrise().expect("defined");
        let sunset = cal.sea_level_sunset().expect("defined");
        let transit = cal.sun_transit_from_times(&sunrise, &sunset).expect("defined");
        let mid = sunrise.clone() + (sunset - sunrise) / 2;
        assert!((transit - mid).num_seconds().abs() <= 1);
    }

    #[test]
    fn test_solar_midnight_is_after_sunset() {
        let cal = jerusalem_on((2022, 7, 1));
        let sunset = cal.sea_level_sunset().expect("defined");
        let midnight = cal.solar_midnight().expect("defined");
        assert!(midnight > sunset);
        // Around six night hours later, i.e. the small hours of the next day.
        assert!(midnight.hour() < 3);
    }

    #[test]
    fn test_polar_night_propagates_none() {
        let geo = GeoLocation::new("Utqiagvik", 71.29, -156.79, 0.0, -540).expect("valid");
        let cal = AstronomicalCalendar::for_date(
            geo,
            NaiveDate::from_ymd_opt(2022, 12, 21).expect("valid"),
        )
        .expect("valid");
        assert_eq!(cal.sunrise(), None);
        assert_eq!(cal.temporal_hour(), None);
        assert_eq!(cal.solar_midnight(), None);
    }

    #[test]
    fn test_time_offset_propagates_none() {
        let cal = jerusalem_on((2022, 4, 22));
        assert_eq!(time_offset(None::<DateTime<chrono::FixedOffset>>, 60_000), None);
        let sunset = cal.sunset();
        let shifted = time_offset(sunset.clone(), -37 * 60 * 1000).expect("defined");
        assert_eq!(sunset.expect("defined") - shifted, Duration::minutes(37));
    }

    #[test]
    fn test_local_mean_time_noon_near_clock_noon() {
        let cal = jerusalem_on((2022, 4, 22));
        // Local mean time at 35.2354 degrees runs 39 minutes behind a
        // UTC+3 clock, so fixed local chatzos lands at 12:39.
        let flc = cal.local_mean_time(12.0).expect("defined");
        assert_eq!((flc.hour(), flc.minute()), (12, 39));
    }
}
