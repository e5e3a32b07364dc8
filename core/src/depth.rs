//! Depth measurement value object.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::units::{check_length_limit, convert_length, LengthUnit};

/// Non-negative depth in meters or feet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDepth")]
pub struct Depth {
    value: Decimal,
    unit: LengthUnit,
}

#[derive(Deserialize)]
struct RawDepth {
    value: Decimal,
    unit: LengthUnit,
}

impl TryFrom<RawDepth> for Depth {
    type Error = DomainError;

    fn try_from(raw: RawDepth) -> Result<Self, Self::Error> {
        Depth::new(raw.value, raw.unit)
    }
}

impl Depth {
    pub fn new(value: Decimal, unit: LengthUnit) -> Result<Self, DomainError> {
        if value < Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "value",
                value,
                "Depth cannot be negative",
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

    /// Express this depth in `target`. Returns an identical value when the unit already matches.
    pub fn convert_to(&self, target: LengthUnit) -> Self {
        if self.unit == target {
            return *self;
        }
        Self {
            value: convert_length(self.value, self.unit, target),
            unit: target,
        }
    }

    pub fn classification(&self) -> DepthClass {
        DepthClass::from_meters(self.to_meters())
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.abbreviation())
    }
}

/// Classification of dive depth ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthClass {
    /// 0-18m (0-60ft) - recreational limit
    Recreational,
    /// 18-40m (60-130ft) - deep recreational
    Deep,
    /// 40-60m (130-200ft) - extended range / technical
    Extended,
    /// 60m+ (200ft+) - extreme technical
    Extreme,
}

impl DepthClass {
    pub fn from_meters(depth: Decimal) -> Self {
        if depth <= Decimal::from(18) {
            DepthClass::Recreational
        } else if depth <= Decimal::from(40) {
            DepthClass::Deep
        } else if depth <= Decimal::from(60) {
            DepthClass::Extended
        } else {
            DepthClass::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DepthClass::Recreational => "Recreational",
            DepthClass::Deep => "Deep",
            DepthClass::Extended => "Extended Range",
            DepthClass::Extreme => "Extreme",
        }
    }
}
