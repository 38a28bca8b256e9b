use chrono::{DateTime, Datelike, TimeZone};

use crate::constants::{JULIAN_DAY_JAN_1_2000, JULIAN_DAYS_PER_CENTURY, SolarEvent};
use crate::geolocation::GeoLocation;
use crate::sun_times_calculator::{AstronomicalCalculatorTrait, adjust_zenith, normalize_hours};

/// The NOAA implementation of Jean Meeus's solar algorithms. Slightly more
/// accurate than the almanac calculator far from the present epoch; offered
/// as the configurable alternate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NOAACalculator;

/// Julian day at midnight UTC of the given civil date.
pub(crate) fn julian_day<Tz: TimeZone>(date_time: &DateTime<Tz>) -> f64 {
    let mut year = date_time.year();
    let mut month = date_time.month() as i32;
    let day = date_time.day() as i64;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let a = year / 100;
    let b = 2 - a + a / 4;

    (365.25 * (year + 4716) as f64).floor() + (30.6001 * (month + 1) as f64).floor()
        + day as f64
        + b as f64
        - 1524.5
}

fn julian_centuries(julian_day: f64) -> f64 {
    (julian_day - JULIAN_DAY_JAN_1_2000) / JULIAN_DAYS_PER_CENTURY
}

impl NOAACalculator {
    fn sun_geometric_mean_longitude(t: f64) -> f64 {
        let longitude = 280.46646 + t * (36000.76983 + 0.0003032 * t);
        let r = longitude % 360.0;
        if r < 0.0 { r + 360.0 } else { r }
    }

    fn sun_geometric_mean_anomaly(t: f64) -> f64 {
        357.52911 + t * (35999.05029 - 0.0001537 * t)
    }

    fn earth_orbit_eccentricity(t: f64) -> f64 {
        0.016708634 - t * (0.000042037 + 0.0000001267 * t)
    }

    fn sun_equation_of_center(t: f64) -> f64 {
        let m_rad = Self::sun_geometric_mean_anomaly(t).to_radians();
        m_rad.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
            + (m_rad * 2.0).sin() * (0.019993 - 0.000101 * t)
            + (m_rad * 3.0).sin() * 0.000289
    }

    fn sun_true_longitude(t: f64) -> f64 {
        Self::sun_geometric_mean_longitude(t) + Self::sun_equation_of_center(t)
    }

    fn sun_apparent_longitude(t: f64) -> f64 {
        let omega = 125.04 - 1934.136 * t;
        Self::sun_true_longitude(t) - 0.00569 - 0.00478 * omega.to_radians().sin()
    }

    fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
        let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
        23.0 + (26.0 + seconds / 60.0) / 60.0
    }

    fn obliquity_correction(t: f64) -> f64 {
        let omega = 125.04 - 1934.136 * t;
        Self::mean_obliquity_of_ecliptic(t) + 0.00256 * omega.to_radians().cos()
    }

    fn sun_declination(t: f64) -> f64 {
        let sin_t = Self::obliquity_correction(t).to_radians().sin()
            * Self::sun_apparent_longitude(t).to_radians().sin();
        sin_t.asin().to_degrees()
    }

    /// Equation of time in minutes: apparent minus mean solar time.
    fn equation_of_time(t: f64) -> f64 {
        let epsilon = Self::obliquity_correction(t);
        let l0 = Self::sun_geometric_mean_longitude(t);
        let e = Self::earth_orbit_eccentricity(t);
        let m = Self::sun_geometric_mean_anomaly(t);

        let mut y = (epsilon.to_radians() / 2.0).tan();
        y *= y;

        let sin_2l0 = (2.0 * l0.to_radians()).sin();
        let cos_2l0 = (2.0 * l0.to_radians()).cos();
        let sin_4l0 = (4.0 * l0.to_radians()).sin();
        let sin_m = m.to_radians().sin();
        let sin_2m = (2.0 * m.to_radians()).sin();

        let eot = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
            - 0.5 * y * y * sin_4l0
            - 1.25 * e * e * sin_2m;
        eot.to_degrees() * 4.0
    }

    /// Hour angle at the requested zenith; NaN when the sun never gets
    /// there. Negated for sunset.
    fn sun_hour_angle(latitude: f64, declination: f64, zenith: f64, event: SolarEvent) -> f64 {
        let lat_rad = latitude.to_radians();
        let dec_rad = declination.to_radians();
        let hour_angle = (zenith.to_radians().cos() / (lat_rad.cos() * dec_rad.cos())
            - lat_rad.tan() * dec_rad.tan())
        .acos();
        if event == SolarEvent::Sunset { -hour_angle } else { hour_angle }
    }

    /// Minutes from midnight UTC of solar noon (or midnight) at the given
    /// longitude, with one refinement pass through the equation of time.
    fn solar_noon_midnight_utc(julian_day: f64, longitude: f64, event: SolarEvent) -> f64 {
        let julian_day = if event == SolarEvent::Noon {
            julian_day
        } else {
            julian_day + 0.5
        };

        let t_est = julian_centuries(julian_day + longitude / 360.0);
        let sol_noon_est = longitude * 4.0 - Self::equation_of_time(t_est);

        let t = julian_centuries(julian_day + sol_noon_est / 1440.0);
        let base = if event == SolarEvent::Noon { 720.0 } else { 1440.0 };
        base + longitude * 4.0 - Self::equation_of_time(t)
    }

    /// Minutes from midnight UTC of the rise/set event, computed at an
    /// estimate anchored at local solar noon and refined once.
    fn sun_rise_set_utc<Tz: TimeZone>(
        date_time: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        zenith: f64,
        event: SolarEvent,
    ) -> f64 {
        let jd = julian_day(date_time);

        let noon_minutes = Self::solar_noon_midnight_utc(jd, longitude, SolarEvent::Noon);
        let t_noon = julian_centuries(jd + noon_minutes / 1440.0);

        let mut eot = Self::equation_of_time(t_noon);
        let mut declination = Self::sun_declination(t_noon);
        let mut hour_angle = Self::sun_hour_angle(latitude, declination, zenith, event);
        let mut time_utc = 720.0 + 4.0 * (longitude - hour_angle.to_degrees()) - eot;

        let t_refined = julian_centuries(jd + time_utc / 1440.0);
        eot = Self::equation_of_time(t_refined);
        declination = Self::sun_declination(t_refined);
        hour_angle = Self::sun_hour_angle(latitude, declination, zenith, event);
        time_utc = 720.0 + 4.0 * (longitude - hour_angle.to_degrees()) - eot;

        time_utc
    }

    fn rise_set<Tz: TimeZone>(
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
        event: SolarEvent,
    ) -> Option<f64> {
        let elevation = if adjust_for_elevation {
            geo_location.elevation()
        } else {
            0.0
        };
        let adjusted_zenith = adjust_zenith(zenith, elevation);
        // The formulas treat west longitude as positive.
        let minutes = Self::sun_rise_set_utc(
            date_time,
            geo_location.latitude(),
            -geo_location.longitude(),
            adjusted_zenith,
            event,
        );
        let hours = normalize_hours(minutes / 60.0);
        if hours.is_nan() { None } else { Some(hours) }
    }
}

impl AstronomicalCalculatorTrait for NOAACalculator {
    fn get_utc_sunrise<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        Self::rise_set(date_time, geo_location, zenith, adjust_for_elevation, SolarEvent::Sunrise)
    }

    fn get_utc_sunset<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        Self::rise_set(date_time, geo_location, zenith, adjust_for_elevation, SolarEvent::Sunset)
    }

    fn get_utc_noon<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64> {
        let minutes = Self::solar_noon_midnight_utc(
            julian_day(date_time),
            -geo_location.longitude(),
            SolarEvent::Noon,
        );
        let hours = normalize_hours(minutes / 60.0);
        if hours.is_nan() { None } else { Some(hours) }
    }

    fn get_utc_midnight<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64> {
        let minutes = Self::solar_noon_midnight_utc(
            julian_day(date_time),
            -geo_location.longitude(),
            SolarEvent::Midnight,
        );
        let hours = normalize_hours(minutes / 60.0);
        if hours.is_nan() { None } else { Some(hours) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GEOMETRIC_ZENITH;
    use chrono::Utc;

    #[test]
    fn test_julian_day_epoch() {
        let d = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).single().expect("valid");
        assert_eq!(julian_day(&d), 2451544.5);
    }

    #[test]
    fn test_julian_day_bavli_cycle_start() {
        let d = Utc.with_ymd_and_hms(1923, 9, 11, 0, 0, 0).single().expect("valid");
        assert_eq!(julian_day(&d), 2423673.5);
    }

    #[test]
    fn test_noaa_tracks_almanac_calculator() {
        use crate::sun_times_calculator::SunTimesCalculator;
        let loc = GeoLocation::new("Jerusalem", 31.778, 35.2354, 0.0, 120).expect("valid");
        let date = Utc.with_ymd_and_hms(2022, 4, 22, 0, 0, 0).single().expect("valid");
        let noaa = NOAACalculator
            .get_utc_sunset(&date, &loc, GEOMETRIC_ZENITH, false)
            .expect("defined");
        let usno = SunTimesCalculator
            .get_utc_sunset(&date, &loc, GEOMETRIC_ZENITH, false)
            .expect("defined");
        // The two algorithms agree to about two minutes.
        assert!((noaa - usno).abs() < 2.0 / 60.0, "noaa {noaa} usno {usno}");
    }

    #[test]
    fn test_polar_night_undefined() {
        let barrow = GeoLocation::new("Utqiagvik", 71.29, -156.79, 0.0, -540).expect("valid");
        let date = Utc.with_ymd_and_hms(2022, 12, 21, 0, 0, 0).single().expect("valid");
        assert_eq!(
            NOAACalculator.get_utc_sunrise(&date, &barrow, GEOMETRIC_ZENITH, false),
            None
        );
    }

    #[test]
    fn test_noon_defined_everywhere() {
        let barrow = GeoLocation::new("Utqiagvik", 71.29, -156.79, 0.0, -540).expect("valid");
        let date = Utc.with_ymd_and_hms(2022, 12, 21, 0, 0, 0).single().expect("valid");
        assert!(NOAACalculator.get_utc_noon(&date, &barrow).is_some());
    }
}
