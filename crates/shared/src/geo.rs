use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A point on Earth in decimal degrees.
///
/// `Display` renders the form-field text `"<lat>, <lng>"` with each component
/// written by [`format_degrees`], so `-20.0` prints as `-20`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and inside the usual degree ranges.
    /// Nothing rejects out-of-range values; this is only used for diagnostics.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lng.abs() <= MAX_LONGITUDE
    }
}

/// Shortest decimal that round-trips, written the way a browser prints a
/// number: negative zero is `0` and magnitudes below 1e-6 use an exponent.
pub fn format_degrees(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format_degrees(self.lat),
            format_degrees(self.lng)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    #[error("expected \"<lat>, <lng>\"")]
    MissingSeparator,
    #[error("invalid latitude: {0:?}")]
    InvalidLatitude(String),
    #[error("invalid longitude: {0:?}")]
    InvalidLongitude(String),
}

fn parse_component(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or(CoordinateParseError::MissingSeparator)?;
        let lat = parse_component(lat)
            .ok_or_else(|| CoordinateParseError::InvalidLatitude(lat.trim().to_string()))?;
        let lng = parse_component(lng)
            .ok_or_else(|| CoordinateParseError::InvalidLongitude(lng.trim().to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_numbers_drop_fraction() {
        assert_eq!(Coordinate::new(-20.0, 0.0).to_string(), "-20, 0");
    }

    #[test]
    fn test_display_keeps_full_precision() {
        let c = Coordinate::new(51.507351, -0.127758);
        assert_eq!(c.to_string(), "51.507351, -0.127758");
    }

    #[test]
    fn test_display_negative_zero_is_zero() {
        assert_eq!(Coordinate::new(-0.0, 5.0).to_string(), "0, 5");
    }

    #[test]
    fn test_display_tiny_values_use_exponent() {
        assert_eq!(format_degrees(1e-7), "1e-7");
        assert_eq!(format_degrees(-2.5e-8), "-2.5e-8");
        assert_eq!(format_degrees(0.000001), "0.000001");
        let c: Coordinate = Coordinate::new(1e-7, 3.0).to_string().parse().unwrap();
        assert_eq!(c, Coordinate::new(1e-7, 3.0));
    }

    #[test]
    fn test_parse_field_text() {
        let c: Coordinate = "43.6532, -79.3832".parse().unwrap();
        assert!((c.lat - 43.6532).abs() < 1e-12);
        assert!((c.lng - -79.3832).abs() < 1e-12);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let c: Coordinate = "  10.5 ,20  ".parse().unwrap();
        assert_eq!(c, Coordinate::new(10.5, 20.0));
    }

    #[test]
    fn test_parse_reads_back_display() {
        let original = Coordinate::new(-33.868820, 151.209296);
        let parsed: Coordinate = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            "43.6 -79.3".parse::<Coordinate>(),
            Err(CoordinateParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_bad_latitude() {
        assert_eq!(
            "north, 3".parse::<Coordinate>(),
            Err(CoordinateParseError::InvalidLatitude("north".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_nan_longitude() {
        assert_eq!(
            "1, NaN".parse::<Coordinate>(),
            Err(CoordinateParseError::InvalidLongitude("NaN".to_string()))
        );
    }

    #[test]
    fn test_parse_does_not_enforce_range() {
        let c: Coordinate = "120, 500".parse().unwrap();
        assert!(!c.is_valid());
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }
}
