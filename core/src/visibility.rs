use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::units::{check_length_limit, convert_length, LengthUnit};

/// Horizontal underwater visibility, non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVisibility")]
pub struct Visibility {
    value: Decimal,
    unit: LengthUnit,
}

#[derive(Deserialize)]
struct RawVisibility {
    value: Decimal,
    unit: LengthUnit,
}

impl TryFrom<RawVisibility> for Visibility {
    type Error = DomainError;

    fn try_from(raw: RawVisibility) -> Result<Self, Self::Error> {
        Visibility::new(raw.value, raw.unit)
    }
}

impl Visibility {
    pub fn new(value: Decimal, unit: LengthUnit) -> Result<Self, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "value",
                value,
                "Visibility cannot be negative",
            ));
        }
        check_length_limit(value, unit)?;
        Ok(Self { value, unit })
    }

    pub fn from_meters(value: Decimal) -> Result<Self, DomainError> {
        Self::new(value, LengthUnit::Meters)
    }

    pub fn from_feet(value: Decimal) -> Result<Self, DomainError> {
        Self::new(value, LengthUnit::Feet)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn to_meters(&self) -> Decimal {
        convert_length(self.value, self.unit, LengthUnit::Meters)
    }

    pub fn to_feet(&self) -> Decimal {
        convert_length(self.value, self.unit, LengthUnit::Feet)
    }

    pub fn convert_to(&self, target: LengthUnit) -> Self {
        if self.unit == target {
            return *self;
        }
        Self {
            value: convert_length(self.value, self.unit, target),
            unit: target,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_visibility_rejects_negative() {
        let err = Visibility::from_feet(Decimal::from(-5)).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(err.to_string().contains("Visibility cannot be negative"));
        assert!(Visibility::from_meters(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_unconvertible_visibility_rejected() {
        let err = Visibility::from_feet(Decimal::MAX).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(err.to_string().contains("Value is not representable in ft"));

        let widest = Visibility::from_feet(LengthUnit::Feet.max_value()).unwrap();
        assert_eq!(widest.to_meters(), LengthUnit::Meters.max_value());
    }

    #[test]
    fn test_visibility_conversion() {
        let vis = Visibility::from_meters(Decimal::from(20)).unwrap();
        assert_eq!(vis.to_meters(), Decimal::from(20));
        assert_eq!(vis.to_feet(), dec("65.6168"));

        let converted = vis.convert_to(LengthUnit::Feet);
        assert_eq!(converted.unit(), LengthUnit::Feet);
        assert_eq!(converted.to_feet(), dec("65.6168"));
        assert!((converted.to_meters() - Decimal::from(20)).abs() < dec("0.0000000001"));
        assert_eq!(vis.convert_to(LengthUnit::Meters), vis);
    }

    #[test]
    fn test_visibility_equality_and_display() {
        let meters = Visibility::from_meters(Decimal::from(15)).unwrap();
        let feet = Visibility::from_feet(Decimal::from(15)).unwrap();
        assert_ne!(meters, feet);
        assert_eq!(meters, Visibility::new(Decimal::from(15), LengthUnit::Meters).unwrap());
        assert_eq!(meters.to_string(), "15 m");
        assert_eq!(feet.to_string(), "15 ft");
    }
}
