//! Water temperature value object.
//!
//! Bounded below by absolute zero in the unit it was recorded in. There is no
//! physical upper bound; values are capped only where a conversion to the other
//! unit would no longer be representable.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::units::{check_temperature_limit, convert_temperature, TemperatureUnit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWaterTemperature")]
pub struct WaterTemperature {
    value: Decimal,
    unit: TemperatureUnit,
}

#[derive(Deserialize)]
struct RawWaterTemperature {
    value: Decimal,
    unit: TemperatureUnit,
}

impl TryFrom<RawWaterTemperature> for WaterTemperature {
    type Error = DomainError;

    fn try_from(raw: RawWaterTemperature) -> Result<Self, Self::Error> {
        WaterTemperature::new(raw.value, raw.unit)
    }
}

impl WaterTemperature {
    pub fn new(value: Decimal, unit: TemperatureUnit) -> Result<Self, DomainError> {
        let floor = unit.absolute_zero();
        if value < floor {
            return Err(DomainError::out_of_range(
                "value",
                value,
                format!(
                    "Temperature cannot be below absolute zero ({}°{})",
                    floor,
                    unit.symbol()
                ),
            ));
        }
        check_temperature_limit(value, unit)?;
        Ok(Self { value, unit })
    }

    pub fn from_celsius(value: Decimal) -> Result<Self, DomainError> {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub fn from_fahrenheit(value: Decimal) -> Result<Self, DomainError> {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn to_celsius(&self) -> Decimal {
        convert_temperature(self.value, self.unit, TemperatureUnit::Celsius)
    }

    pub fn to_fahrenheit(&self) -> Decimal {
        convert_temperature(self.value, self.unit, TemperatureUnit::Fahrenheit)
    }

    pub fn convert_to(&self, target: TemperatureUnit) -> Self {
        if self.unit == target {
            return *self;
        }
        Self {
            value: convert_temperature(self.value, self.unit, target),
            unit: target,
        }
    }
}

impl fmt::Display for WaterTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}", self.value, self.unit.symbol())
    }
}
