use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// WGS84 latitude/longitude pair, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.latitude, raw.longitude)
    }
}

impl Coordinates {
    /// Latitude is checked before longitude; the first failing field is reported.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(DomainError::out_of_range(
                "latitude",
                latitude,
                "Latitude must be between -90 and 90 degrees",
            ));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(DomainError::out_of_range(
                "longitude",
                longitude,
                "Longitude must be between -180 and 180 degrees",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {}, Longitude: {}",
            self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_inclusive() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let err = Coordinates::new(90.0001, 0.0).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(err.field(), Some("latitude"));

        let err = Coordinates::new(0.0, 180.0001).unwrap_err();
        assert_eq!(err.field(), Some("longitude"));

        let err = Coordinates::new(-91.0, 200.0).unwrap_err();
        assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_accessors_and_display() {
        let blue_hole = Coordinates::new(17.3158, -87.5347).unwrap();
        assert_eq!(blue_hole.latitude(), 17.3158);
        assert_eq!(blue_hole.longitude(), -87.5347);
        assert_eq!(
            blue_hole.to_string(),
            "Latitude: 17.3158, Longitude: -87.5347"
        );
    }

    #[test]
    fn test_serde() {
        let parsed: Coordinates =
            serde_json::from_str(r#"{"latitude":-8.65,"longitude":115.43}"#).unwrap();
        assert_eq!(parsed, Coordinates::new(-8.65, 115.43).unwrap());

        let err = serde_json::from_str::<Coordinates>(r#"{"latitude":95.0,"longitude":0.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Latitude must be between -90 and 90 degrees"));
    }
}
