use core::f64::consts::PI;

use chrono::{Duration, FixedOffset};

use crate::constants::MINUTE_MILLIS;
use crate::error::ZmanimError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum VincentyOutput {
    Distance,
    InitialBearing,
    FinalBearing,
}

/// An immutable place on earth: a display name, WGS-84 coordinates, an
/// elevation in meters and a fixed UTC offset in minutes. There is no
/// timezone database behind this; the caller decides what offset applies
/// to the date being calculated.
#[derive(Debug, PartialEq, Clone)]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    utc_offset_minutes: i32,
}

impl GeoLocation {
    /// Validates and builds a location. Latitude must be within ±90°,
    /// longitude within ±180°, elevation non-negative and finite.
    pub fn new(
        name: &str,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        utc_offset_minutes: i32,
    ) -> Result<Self, ZmanimError> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(ZmanimError::InvalidCoordinate);
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Err(ZmanimError::InvalidCoordinate);
        }
        if elevation < 0.0 || !elevation.is_finite() {
            return Err(ZmanimError::InvalidCoordinate);
        }
        Ok(Self {
            name: name.to_owned(),
            latitude,
            longitude,
            elevation,
            utc_offset_minutes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// The `chrono` zone for this location's fixed UTC offset.
    pub fn fixed_offset(&self) -> FixedOffset {
        // The offset was not range-checked at construction; clamp to the
        // single day chrono supports.
        FixedOffset::east_opt(self.utc_offset_minutes.clamp(-1439, 1439) * 60)
            .unwrap_or(FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// How far local mean time (4 minutes per degree of longitude) runs
    /// ahead of or behind the location's standard clock.
    pub fn local_mean_time_offset(&self) -> Duration {
        let longitude_ms = self.longitude * 4.0 * MINUTE_MILLIS as f64;
        let zone_ms = self.utc_offset_minutes as f64 * MINUTE_MILLIS as f64;
        Duration::milliseconds((longitude_ms - zone_ms) as i64)
    }

    /// Day adjustment for locations whose clock is on the far side of the
    /// antimeridian from their longitude (e.g. Samoa at UTC+14 with a
    /// western longitude). ±20 hours of local-mean-time skew flips a day.
    pub fn antimeridian_adjustment(&self) -> i64 {
        let hours_offset =
            self.local_mean_time_offset().num_milliseconds() as f64 / (60.0 * 60.0 * 1000.0);
        if hours_offset >= 20.0 {
            1
        } else if hours_offset <= -20.0 {
            -1
        } else {
            0
        }
    }

    /// Rhumb-line (constant bearing) distance to another location in
    /// meters, on a spherical earth.
    pub fn rhumb_line_distance(&self, other: &GeoLocation) -> f64 {
        let earth_radius = 6378137.0;
        let d_lat = other.latitude.to_radians() - self.latitude.to_radians();
        let mut d_lon = (other.longitude.to_radians() - self.longitude.to_radians()).abs();
        let d_phi = (other.latitude.to_radians() / 2.0 + PI / 4.0).tan().ln()
            - (self.latitude.to_radians() / 2.0 + PI / 4.0).tan().ln();
        let mut q = d_lat / d_phi;
        if !q.is_finite() {
            q = self.latitude.to_radians().cos();
        }
        if d_lon > PI {
            d_lon = 2.0 * PI - d_lon;
        }
        (d_lat * d_lat + q * q * d_lon * d_lon).sqrt() * earth_radius
    }

    /// Rhumb-line bearing to another location in degrees from true north,
    /// in (−180, +180].
    pub fn rhumb_line_bearing(&self, other: &GeoLocation) -> f64 {
        let mut d_lon = (other.longitude - self.longitude).to_radians();
        let d_phi = (other.latitude.to_radians() / 2.0 + PI / 4.0).tan().ln()
            - (self.latitude.to_radians() / 2.0 + PI / 4.0).tan().ln();
        if d_lon.abs() > PI {
            d_lon = if d_lon > 0.0 {
                -(2.0 * PI - d_lon)
            } else {
                2.0 * PI + d_lon
            };
        }
        d_lon.atan2(d_phi).to_degrees()
    }

    pub fn geodesic_distance(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty_inverse_formula(other, VincentyOutput::Distance)
    }

    pub fn geodesic_initial_bearing(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty_inverse_formula(other, VincentyOutput::InitialBearing)
    }

    pub fn geodesic_final_bearing(&self, other: &GeoLocation) -> Option<f64> {
        self.vincenty_inverse_formula(other, VincentyOutput::FinalBearing)
    }

    /// Vincenty inverse formula on the WGS-84 ellipsoid. Returns `None` if
    /// the lambda iteration fails to converge within 20 rounds, which
    /// happens for nearly antipodal points.
    fn vincenty_inverse_formula(
        &self,
        other: &GeoLocation,
        output: VincentyOutput,
    ) -> Option<f64> {
        let a = 6378137.0;
        let b = 6356752.3142;
        let f = 1.0 / 298.257223563;

        let l = (other.longitude - self.longitude).to_radians();
        let u1 = ((1.0 - f) * self.latitude.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * other.latitude.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut lambda_p = 2.0 * PI;
        let mut iter_limit = 20;
        let mut sin_lambda = 0.0;
        let mut cos_lambda = 0.0;
        let mut sin_sigma = 0.0;
        let mut cos_sigma = 0.0;
        let mut sigma = 0.0;
        let mut cos_sq_alpha = 0.0;
        let mut cos2_sigma_m = 0.0;

        while (lambda - lambda_p).abs() > 1e-12 && iter_limit > 0 {
            sin_lambda = lambda.sin();
            cos_lambda = lambda.cos();
            sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                    * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda))
                .sqrt();
            if sin_sigma == 0.0 {
                // coincident points
                return Some(0.0);
            }
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            cos2_sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
            if cos2_sigma_m.is_nan() {
                // equatorial line
                cos2_sigma_m = 0.0;
            }
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            lambda_p = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos2_sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)));
            iter_limit -= 1;
        }
        if iter_limit == 0 {
            return None;
        }

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = big_b
            * sin_sigma
            * (cos2_sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)
                        - big_b / 6.0
                            * cos2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos2_sigma_m * cos2_sigma_m)));
        let distance = b * big_a * (sigma - delta_sigma);

        match output {
            VincentyOutput::Distance => Some(distance),
            VincentyOutput::InitialBearing => Some(
                (cos_u2 * sin_lambda)
                    .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                    .to_degrees(),
            ),
            VincentyOutput::FinalBearing => Some(
                (cos_u1 * sin_lambda)
                    .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda)
                    .to_degrees(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jerusalem() -> GeoLocation {
        GeoLocation::new("Jerusalem", 31.778, 35.2354, 754.0, 120).expect("valid")
    }

    fn new_york() -> GeoLocation {
        GeoLocation::new("New York", 40.7128, -74.006, 10.0, -300).expect("valid")
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        assert_eq!(
            GeoLocation::new("bad", 90.5, 0.0, 0.0, 0).unwrap_err(),
            ZmanimError::InvalidCoordinate
        );
        assert_eq!(
            GeoLocation::new("bad", 0.0, -180.5, 0.0, 0).unwrap_err(),
            ZmanimError::InvalidCoordinate
        );
        assert_eq!(
            GeoLocation::new("bad", 0.0, 0.0, -1.0, 0).unwrap_err(),
            ZmanimError::InvalidCoordinate
        );
        assert_eq!(
            GeoLocation::new("bad", f64::NAN, 0.0, 0.0, 0).unwrap_err(),
            ZmanimError::InvalidCoordinate
        );
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        assert!(GeoLocation::new("n pole", 90.0, 180.0, 0.0, 720).is_ok());
        assert!(GeoLocation::new("s pole", -90.0, -180.0, 0.0, -720).is_ok());
    }

    #[test]
    fn test_local_mean_time_offset() {
        // Jerusalem: 35.2354 * 4 = 140.9416 min of longitude vs 120 min of zone.
        let offset = jerusalem().local_mean_time_offset();
        assert_eq!(offset.num_milliseconds(), ((35.2354 * 4.0 - 120.0) * 60_000.0) as i64);
    }

    #[test]
    fn test_antimeridian_adjustment() {
        assert_eq!(jerusalem().antimeridian_adjustment(), 0);
        // Samoa-style zone: UTC+14 at 172°W.
        let apia = GeoLocation::new("Apia", -13.85, -171.75, 0.0, 14 * 60).expect("valid");
        assert_eq!(apia.antimeridian_adjustment(), -1);
        let east = GeoLocation::new("far east", 52.0, 179.0, 0.0, -11 * 60).expect("valid");
        assert_eq!(east.antimeridian_adjustment(), 1);
    }

    #[test]
    fn test_geodesic_distance_jerusalem_new_york() {
        // Surveyed value for this pair is about 9,187 km.
        let d = jerusalem().geodesic_distance(&new_york()).expect("converges");
        assert!((d - 9_187_000.0).abs() < 30_000.0, "distance {d}");
    }

    #[test]
    fn test_geodesic_distance_symmetric() {
        let a = jerusalem();
        let b = new_york();
        let d1 = a.geodesic_distance(&b).expect("converges");
        let d2 = b.geodesic_distance(&a).expect("converges");
        assert!((d1 - d2).abs() < 1e-3);
    }

    #[test]
    fn test_geodesic_distance_coincident_points() {
        let a = jerusalem();
        assert_eq!(a.geodesic_distance(&a.clone()), Some(0.0));
    }

    #[test]
    fn test_bearings_are_signed_degrees() {
        // New York is west of Jerusalem: initial bearing is negative
        // (counterclockwise from north) under the (−180, 180] convention.
        let bearing = jerusalem().geodesic_initial_bearing(&new_york()).expect("converges");
        assert!((-180.0..=180.0).contains(&bearing));
        assert!(bearing < 0.0, "bearing {bearing}");
    }

    #[test]
    fn test_rhumb_line_distance_at_least_geodesic() {
        let rhumb = jerusalem().rhumb_line_distance(&new_york());
        let geodesic = jerusalem().geodesic_distance(&new_york()).expect("converges");
        assert!(rhumb >= geodesic - 1.0, "rhumb {rhumb} geodesic {geodesic}");
    }

    #[test]
    fn test_fixed_offset() {
        assert_eq!(jerusalem().fixed_offset().local_minus_utc(), 120 * 60);
        assert_eq!(new_york().fixed_offset().local_minus_utc(), -300 * 60);
    }
}
