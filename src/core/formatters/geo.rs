use crate::domain::model::{Payload, RenderConfig};
use crate::utils::error::{QrGenError, Result};
use crate::utils::validation::parse_numeric_string;
use std::ops::RangeInclusive;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// `geo:<latitude>,<longitude>`, using the coordinates exactly as supplied.
pub fn format(config: RenderConfig, latitude: &str, longitude: &str) -> Result<Payload> {
    let invalid = |reason: String| QrGenError::InvalidCoordinates {
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        reason,
    };

    check_coordinate("latitude", latitude, &LATITUDE_RANGE).map_err(invalid)?;
    check_coordinate("longitude", longitude, &LONGITUDE_RANGE).map_err(invalid)?;

    Payload::new(format!("geo:{},{}", latitude, longitude), config)
}

fn check_coordinate(
    name: &str,
    raw: &str,
    range: &RangeInclusive<f64>,
) -> std::result::Result<(), String> {
    let value = parse_numeric_string(raw)
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} '{}' is not numeric", name, raw))?;
    if !range.contains(&value) {
        return Err(format!(
            "{} {} is outside [{}, {}]",
            name,
            value,
            range.start(),
            range.end()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_out_of_range() {
        let err = format(RenderConfig::default(), "91", "0").unwrap_err();
        assert!(matches!(err, QrGenError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(format(RenderConfig::default(), "0", "180.0001").is_err());
        assert!(format(RenderConfig::default(), "0", "-181").is_err());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(format(RenderConfig::default(), "-90", "180").is_ok());
        assert!(format(RenderConfig::default(), "90", "-180").is_ok());
    }

    #[test]
    fn test_non_numeric_rejected() {
        for (lat, lon) in [
            ("", "0"),
            ("0", ""),
            ("abc", "0"),
            ("NaN", "0"),
            ("inf", "0"),
            ("12,5", "0"),
            ("1 0", "0"),
            ("0x10", "0"),
            ("-", "0"),
            ("1.2.3", "0"),
        ] {
            let err = format(RenderConfig::default(), lat, lon).unwrap_err();
            assert!(
                matches!(err, QrGenError::InvalidCoordinates { .. }),
                "{lat:?},{lon:?}"
            );
        }
    }

    #[test]
    fn test_coordinates_kept_as_supplied() {
        let payload = format(RenderConfig::default(), "45.5", "-122.6").unwrap();
        assert_eq!(payload.as_str(), "geo:45.5,-122.6");

        let payload = format(RenderConfig::default(), "+45.50000", "1e1").unwrap();
        assert_eq!(payload.as_str(), "geo:+45.50000,1e1");
    }

    #[test]
    fn test_surrounding_whitespace_accepted_and_kept() {
        let payload = format(RenderConfig::default(), " 45.5", "-122.6\n").unwrap();
        assert_eq!(payload.as_str(), "geo: 45.5,-122.6\n");

        let err = format(RenderConfig::default(), " 91", "0").unwrap_err();
        assert!(matches!(err, QrGenError::InvalidCoordinates { .. }));
    }
}
