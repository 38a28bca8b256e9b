use chrono::Duration;

/// Scales a duration by a fractional factor, rounding to the nearest
/// nanosecond. Shaah-zmanis interpolation multiplies a twelfth (or sixth)
/// of a day by fractional hour counts like 6.5 or 10.75.
pub fn multiply_duration(dur: Duration, factor: f64) -> Duration {
    let total_nanos = dur.num_nanoseconds().unwrap_or(i64::MAX);
    Duration::nanoseconds((total_nanos as f64 * factor).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integer_multiple() {
        assert_eq!(multiply_duration(Duration::seconds(10), 2.0), Duration::seconds(20));
    }

    #[test]
    fn test_fractional_multiple() {
        assert_eq!(multiply_duration(Duration::seconds(10), 1.5), Duration::seconds(15));
    }

    #[test]
    fn test_subsecond_multiple() {
        assert_eq!(multiply_duration(Duration::milliseconds(500), 0.5), Duration::milliseconds(250));
    }

    #[test]
    fn test_negative_factor() {
        assert_eq!(multiply_duration(Duration::seconds(10), -0.5), Duration::seconds(-5));
    }
}
