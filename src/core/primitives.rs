use chrono::{DateTime, Utc};

use crate::error::{ChartError, ChartResult};

pub const SECONDS_PER_DAY: i64 = 86_400;

pub fn unix_seconds_to_datetime(seconds: i64) -> ChartResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {seconds} is out of datetime range"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Day bucket of a unix timestamp, flooring toward negative infinity.
#[must_use]
pub const fn day_index(timestamp_seconds: i64) -> i64 {
    timestamp_seconds.div_euclid(SECONDS_PER_DAY)
}

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::{day_index, normalize_degrees, unix_seconds_to_datetime};

    #[test]
    fn day_index_floors_toward_negative_infinity() {
        assert_eq!(day_index(0), 0);
        assert_eq!(day_index(86_399), 0);
        assert_eq!(day_index(86_400), 1);
        assert_eq!(day_index(-1), -1);
        assert_eq!(day_index(-86_400), -1);
        assert_eq!(day_index(-86_401), -2);
    }

    #[test]
    fn normalize_degrees_wraps_into_positive_range() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        assert!(unix_seconds_to_datetime(i64::MAX).is_err());
        assert!(unix_seconds_to_datetime(1_700_000_000).is_ok());
    }
}
