use chrono::{DateTime, Datelike, TimeZone};

use crate::constants::{EARTH_RADIUS_KM, GEOMETRIC_ZENITH, REFRACTION, SOLAR_RADIUS, SolarEvent};
use crate::geolocation::GeoLocation;

/// A solar-position capability. The astronomical calendar holds one of
/// these by value; implementations are pure functions of the inputs.
///
/// All results are fractional UTC hours normalized into `[0, 24)`. `None`
/// means the sun never reaches the requested zenith at this latitude and
/// date (polar day or night, or a twilight angle never attained).
pub trait AstronomicalCalculatorTrait: Clone {
    fn get_utc_sunrise<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;

    fn get_utc_sunset<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64>;

    fn get_utc_noon<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64>;

    fn get_utc_midnight<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64>;
}

/// The zenith gain from standing above sea level: the horizon dips by
/// `acos(r / (r + elevation))`.
pub(crate) fn elevation_adjustment(elevation_meters: f64) -> f64 {
    (EARTH_RADIUS_KM / (EARTH_RADIUS_KM + elevation_meters / 1000.0))
        .acos()
        .to_degrees()
}

/// Refraction, solar radius and elevation are folded in only for the bare
/// geometric zenith. Twilight angles already account for atmospherics and
/// are used exactly as requested.
pub(crate) fn adjust_zenith(zenith: f64, elevation_meters: f64) -> f64 {
    if zenith == GEOMETRIC_ZENITH {
        zenith + SOLAR_RADIUS + REFRACTION + elevation_adjustment(elevation_meters)
    } else {
        zenith
    }
}

pub(crate) fn normalize_hours(hours: f64) -> f64 {
    let h = hours % 24.0;
    if h < 0.0 { h + 24.0 } else { h }
}

/// The US Naval Observatory "Almanac for Computers" sunrise/sunset
/// algorithm. Closed form, deterministic, and accurate to well under a
/// minute at inhabited latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunTimesCalculator;

const DEG_PER_HOUR: f64 = 360.0 / 24.0;

impl SunTimesCalculator {
    fn sin_deg(deg: f64) -> f64 {
        deg.to_radians().sin()
    }

    fn cos_deg(deg: f64) -> f64 {
        deg.to_radians().cos()
    }

    fn tan_deg(deg: f64) -> f64 {
        deg.to_radians().tan()
    }

    fn acos_deg(x: f64) -> f64 {
        x.acos().to_degrees()
    }

    fn asin_deg(x: f64) -> f64 {
        x.asin().to_degrees()
    }

    fn atan_deg(x: f64) -> f64 {
        x.atan().to_degrees()
    }

    /// Approximate time of the solar event in fractional days from the
    /// start of the year, seeded at 6:00 for sunrise and 18:00 for sunset.
    fn approx_time_days(day_of_year: f64, hours_from_meridian: f64, event: SolarEvent) -> f64 {
        let seed = match event {
            SolarEvent::Sunset => 18.0,
            _ => 6.0,
        };
        day_of_year + (seed - hours_from_meridian) / 24.0
    }

    /// Sun's mean anomaly in degrees at the approximate event time.
    fn mean_anomaly(t: f64) -> f64 {
        0.9856 * t - 3.289
    }

    /// Sun's true longitude in degrees, normalized into [0, 360).
    fn sun_true_longitude(mean_anomaly: f64) -> f64 {
        let l = mean_anomaly
            + 1.916 * Self::sin_deg(mean_anomaly)
            + 0.020 * Self::sin_deg(2.0 * mean_anomaly)
            + 282.634;
        if l >= 360.0 {
            l - 360.0
        } else if l < 0.0 {
            l + 360.0
        } else {
            l
        }
    }

    /// Sun's right ascension in hours, forced into the same quadrant as
    /// the true longitude.
    fn sun_right_ascension_hours(sun_true_longitude: f64) -> f64 {
        let mut ra = Self::atan_deg(0.91764 * Self::tan_deg(sun_true_longitude));
        if ra < 0.0 {
            ra += 360.0;
        }
        let l_quadrant = (sun_true_longitude / 90.0).floor() * 90.0;
        let ra_quadrant = (ra / 90.0).floor() * 90.0;
        ra += l_quadrant - ra_quadrant;
        ra / DEG_PER_HOUR
    }

    /// Cosine of the sun's local hour angle at the requested zenith.
    /// Magnitudes above 1 mean the sun never reaches the angle.
    fn cos_local_hour_angle(sun_true_longitude: f64, latitude: f64, zenith: f64) -> f64 {
        let sin_dec = 0.39782 * Self::sin_deg(sun_true_longitude);
        let cos_dec = Self::cos_deg(Self::asin_deg(sin_dec));
        (Self::cos_deg(zenith) - sin_dec * Self::sin_deg(latitude))
            / (cos_dec * Self::cos_deg(latitude))
    }

    fn utc_time_of_event<Tz: TimeZone>(
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

        // Day of year of the requested date, not of the wall clock.
        let day_of_year = date_time.ordinal() as f64;
        let hours_from_meridian = geo_location.longitude() / DEG_PER_HOUR;

        let t = Self::approx_time_days(day_of_year, hours_from_meridian, event);
        let l = Self::sun_true_longitude(Self::mean_anomaly(t));
        let cos_h = Self::cos_local_hour_angle(l, geo_location.latitude(), adjusted_zenith);
        if !(-1.0..=1.0).contains(&cos_h) || cos_h.is_nan() {
            return None;
        }

        let hour_angle = match event {
            SolarEvent::Sunset => Self::acos_deg(cos_h),
            _ => 360.0 - Self::acos_deg(cos_h),
        };
        let local_hour = hour_angle / DEG_PER_HOUR;
        let ra_hours = Self::sun_right_ascension_hours(l);
        let local_mean_time = local_hour + ra_hours - 0.06571 * t - 6.622;

        Some(normalize_hours(local_mean_time - hours_from_meridian))
    }
}

impl AstronomicalCalculatorTrait for SunTimesCalculator {
    fn get_utc_sunrise<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        Self::utc_time_of_event(
            date_time,
            geo_location,
            zenith,
            adjust_for_elevation,
            SolarEvent::Sunrise,
        )
    }

    fn get_utc_sunset<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
        zenith: f64,
        adjust_for_elevation: bool,
    ) -> Option<f64> {
        Self::utc_time_of_event(
            date_time,
            geo_location,
            zenith,
            adjust_for_elevation,
            SolarEvent::Sunset,
        )
    }

    fn get_utc_noon<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64> {
        let sunrise = self.get_utc_sunrise(date_time, geo_location, GEOMETRIC_ZENITH, false)?;
        let sunset = self.get_utc_sunset(date_time, geo_location, GEOMETRIC_ZENITH, false)?;
        let mut noon = sunrise + (sunset - sunrise) / 2.0;
        if sunrise > sunset {
            noon -= 12.0;
        }
        Some(normalize_hours(noon))
    }

    fn get_utc_midnight<Tz: TimeZone>(
        &self,
        date_time: &DateTime<Tz>,
        geo_location: &GeoLocation,
    ) -> Option<f64> {
        Some(normalize_hours(self.get_utc_noon(date_time, geo_location)? + 12.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn jerusalem() -> GeoLocation {
        GeoLocation::new("Jerusalem", 31.778, 35.2354, 0.0, 120).expect("valid")
    }

    fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single().expect("valid date")
    }

    #[test]
    fn test_jerusalem_equinox_sunrise_sunset() {
        let calc = SunTimesCalculator;
        let date = utc_date(2022, 3, 21);
        let sunrise = calc
            .get_utc_sunrise(&date, &jerusalem(), GEOMETRIC_ZENITH, false)
            .expect("sun rises");
        let sunset = calc
            .get_utc_sunset(&date, &jerusalem(), GEOMETRIC_ZENITH, false)
            .expect("sun sets");
        // Around the equinox sunrise in Jerusalem is ~05:42 local (03:42 UTC)
        // and sunset ~17:51 local (15:51 UTC).
        assert!((sunrise - 3.7).abs() < 0.2, "sunrise {sunrise}");
        assert!((sunset - 15.85).abs() < 0.2, "sunset {sunset}");
    }

    #[test]
    fn test_polar_night_is_undefined() {
        let calc = SunTimesCalculator;
        let barrow = GeoLocation::new("Utqiagvik", 71.29, -156.79, 0.0, -540).expect("valid");
        let date = utc_date(2022, 12, 21);
        assert_eq!(calc.get_utc_sunrise(&date, &barrow, GEOMETRIC_ZENITH, false), None);
        assert_eq!(calc.get_utc_sunset(&date, &barrow, GEOMETRIC_ZENITH, false), None);
    }

    #[test]
    fn test_deep_twilight_never_reached_in_polar_summer() {
        let calc = SunTimesCalculator;
        let tromso = GeoLocation::new("Tromso", 69.65, 18.96, 0.0, 60).expect("valid");
        let date = utc_date(2022, 6, 21);
        // The sun stays up; an 18 degree dusk does not exist.
        assert_eq!(calc.get_utc_sunset(&date, &tromso, 108.0, false), None);
    }

    #[test]
    fn test_elevation_widens_the_day() {
        let calc = SunTimesCalculator;
        let date = utc_date(2022, 6, 1);
        let sea = GeoLocation::new("sea", 31.778, 35.2354, 0.0, 120).expect("valid");
        let high = GeoLocation::new("high", 31.778, 35.2354, 800.0, 120).expect("valid");
        let rise_sea = calc.get_utc_sunrise(&date, &sea, GEOMETRIC_ZENITH, true).expect("defined");
        let rise_high = calc.get_utc_sunrise(&date, &high, GEOMETRIC_ZENITH, true).expect("defined");
        let set_sea = calc.get_utc_sunset(&date, &sea, GEOMETRIC_ZENITH, true).expect("defined");
        let set_high = calc.get_utc_sunset(&date, &high, GEOMETRIC_ZENITH, true).expect("defined");
        assert!(rise_high < rise_sea);
        assert!(set_high > set_sea);
    }

    #[test]
    fn test_elevation_ignored_for_twilight_zeniths() {
        let calc = SunTimesCalculator;
        let date = utc_date(2022, 6, 1);
        let high = GeoLocation::new("high", 31.778, 35.2354, 800.0, 120).expect("valid");
        // adjust_for_elevation only matters at the geometric zenith.
        let a = calc.get_utc_sunrise(&date, &high, 96.0, true);
        let b = calc.get_utc_sunrise(&date, &high, 96.0, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_noon_between_sunrise_and_sunset() {
        let calc = SunTimesCalculator;
        let date = utc_date(2022, 4, 22);
        let loc = jerusalem();
        let sunrise = calc.get_utc_sunrise(&date, &loc, GEOMETRIC_ZENITH, false).expect("defined");
        let sunset = calc.get_utc_sunset(&date, &loc, GEOMETRIC_ZENITH, false).expect("defined");
        let noon = calc.get_utc_noon(&date, &loc).expect("defined");
        assert!(sunrise < noon && noon < sunset);
    }

    #[test]
    fn test_results_normalized() {
        let calc = SunTimesCalculator;
        let date = utc_date(2022, 7, 4);
        let nz = GeoLocation::new("Auckland", -36.85, 174.76, 0.0, 720).expect("valid");
        for z in [90.0_f64, 96.0, 102.0, 108.0] {
            if let Some(h) = calc.get_utc_sunrise(&date, &nz, z, false) {
                assert!((0.0..24.0).contains(&h));
            }
            if let Some(h) = calc.get_utc_sunset(&date, &nz, z, false) {
                assert!((0.0..24.0).contains(&h));
            }
        }
    }
}
