//! Units of measure and the conversion factors between them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Feet per meter (3.28084).
pub const FEET_PER_METER: Decimal = Decimal::from_parts(328_084, 0, 0, false, 5);

/// Absolute zero in degrees Celsius (-273.15).
pub const ABSOLUTE_ZERO_CELSIUS: Decimal = Decimal::from_parts(27_315, 0, 0, true, 2);

/// Absolute zero in degrees Fahrenheit (-459.67).
pub const ABSOLUTE_ZERO_FAHRENHEIT: Decimal = Decimal::from_parts(45_967, 0, 0, true, 2);

/// Largest accepted magnitude in meters or degrees Celsius (10^27). Every
/// value within the per-unit limits converts without overflowing.
pub const MAX_BASE_MAGNITUDE: Decimal =
    Decimal::from_parts(3_892_314_112, 2_681_241_660, 54_210_108, false, 0);

/// `MAX_BASE_MAGNITUDE` meters expressed in feet.
const MAX_FEET: Decimal =
    Decimal::from_parts(1_291_845_632, 3_345_208_801, 177_854_692, false, 0);

/// `MAX_BASE_MAGNITUDE` degrees Celsius expressed in Fahrenheit.
const MAX_FAHRENHEIT: Decimal =
    Decimal::from_parts(134_217_760, 2_249_254_612, 97_578_195, false, 0);

const FAHRENHEIT_OFFSET: Decimal = Decimal::from_parts(32, 0, 0, false, 0);
const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const NINE: Decimal = Decimal::from_parts(9, 0, 0, false, 0);

/// Unit of a length measurement (depth, visibility).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    Meters,
    Feet,
}

impl LengthUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        }
    }

    /// Largest value in this unit that can still be converted to the other one.
    pub fn max_value(&self) -> Decimal {
        match self {
            LengthUnit::Meters => MAX_BASE_MAGNITUDE,
            LengthUnit::Feet => MAX_FEET,
        }
    }
}

/// Unit of a temperature measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    /// Lowest legal value in this unit.
    pub fn absolute_zero(&self) -> Decimal {
        match self {
            TemperatureUnit::Celsius => ABSOLUTE_ZERO_CELSIUS,
            TemperatureUnit::Fahrenheit => ABSOLUTE_ZERO_FAHRENHEIT,
        }
    }

    /// Largest value in this unit that can still be converted to the other one.
    pub fn max_value(&self) -> Decimal {
        match self {
            TemperatureUnit::Celsius => MAX_BASE_MAGNITUDE,
            TemperatureUnit::Fahrenheit => MAX_FAHRENHEIT,
        }
    }
}

/// Reject a length that could not be converted to the other unit.
pub(crate) fn check_length_limit(
    value: Decimal,
    unit: LengthUnit,
) -> Result<(), DomainError> {
    if value > unit.max_value() {
        return Err(DomainError::out_of_range(
            "value",
            value,
            format!("Value is not representable in {}", unit.abbreviation()),
        ));
    }
    Ok(())
}

/// Reject a temperature that could not be converted to the other unit.
pub(crate) fn check_temperature_limit(
    value: Decimal,
    unit: TemperatureUnit,
) -> Result<(), DomainError> {
    if value > unit.max_value() {
        return Err(DomainError::out_of_range(
            "value",
            value,
            format!("Value is not representable in °{}", unit.symbol()),
        ));
    }
    Ok(())
}

/// Convert a length between units. Same-unit conversion returns `value` untouched.
///
/// `value` must lie within `from.max_value()`; the result then lies within
/// `to.max_value()`.
pub(crate) fn convert_length(value: Decimal, from: LengthUnit, to: LengthUnit) -> Decimal {
    match (from, to) {
        (LengthUnit::Meters, LengthUnit::Feet) => value * FEET_PER_METER,
        (LengthUnit::Feet, LengthUnit::Meters) => value / FEET_PER_METER,
        _ => value,
    }
}

/// Convert a temperature between units. Same-unit conversion returns `value` untouched.
///
/// `value` must lie between absolute zero and `from.max_value()`.
pub(crate) fn convert_temperature(
    value: Decimal,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Decimal {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
            value * NINE / FIVE + FAHRENHEIT_OFFSET
        }
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
            (value - FAHRENHEIT_OFFSET) * FIVE / NINE
        }
        _ => value,
    }
}
