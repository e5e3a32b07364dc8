//! Display preferences: which units measurements are rendered in.
//!
//! Settings are persisted by the host as a small JSON document. Missing keys
//! fall back to metric defaults so older documents keep loading.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depth::Depth;
use crate::error::DomainError;
use crate::temperature::WaterTemperature;
use crate::units::{LengthUnit, TemperatureUnit};
use crate::visibility::Visibility;

/// Decimal places kept when rendering a measurement for display.
const DISPLAY_PRECISION: u32 = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub length_unit: LengthUnit,
    pub temperature_unit: TemperatureUnit,
}

impl DisplaySettings {
    pub fn metric() -> Self {
        Self::default()
    }

    pub fn imperial() -> Self {
        Self {
            length_unit: LengthUnit::Feet,
            temperature_unit: TemperatureUnit::Fahrenheit,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidSettings {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::InvalidSettings {
            message: e.to_string(),
        })
    }

    pub fn present_depth(&self, depth: &Depth) -> String {
        let shown = depth.convert_to(self.length_unit);
        format!("{} {}", round(shown.value()), shown.unit().abbreviation())
    }

    pub fn present_visibility(&self, visibility: &Visibility) -> String {
        let shown = visibility.convert_to(self.length_unit);
        format!("{} {}", round(shown.value()), shown.unit().abbreviation())
    }

    pub fn present_temperature(&self, temperature: &WaterTemperature) -> String {
        let shown = temperature.convert_to(self.temperature_unit);
        format!("{}°{}", round(shown.value()), shown.unit().symbol())
    }
}

fn round(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_PRECISION).normalize()
}
