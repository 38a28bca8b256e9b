#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod jewish_calendar_test;
mod jewish_date_test;
mod tefila_rules_test;
mod zmanim_calendar_test;

use chrono::{DateTime, TimeZone};

use crate::geolocation::GeoLocation;

/// Asserts two instants agree to within `tolerance_millis`.
pub fn assert_almost_equal_datetime<Tz: TimeZone>(
    a: &DateTime<Tz>,
    b: &DateTime<Tz>,
    tolerance_millis: i64,
    message: &str,
) {
    let distance = (a.timestamp_millis() - b.timestamp_millis()).abs();
    assert!(
        distance < tolerance_millis,
        "{message}: {:?} vs {:?}, distance {distance} ms",
        a,
        b
    );
}

pub fn jerusalem() -> GeoLocation {
    GeoLocation::new("Jerusalem", 31.778, 35.2354, 754.0, 180).expect("valid location")
}

pub fn new_york() -> GeoLocation {
    GeoLocation::new("New York", 40.7128, -74.006, 10.0, -240).expect("valid location")
}
