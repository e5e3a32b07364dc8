//! Functions exported to the mobile shell through UniFFI.
//!
//! The host deals in `f64` and flat records; everything is funnelled through
//! the value objects so the app and the API enforce the same rules.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::coordinates::Coordinates;
use crate::depth::Depth;
use crate::error::DomainError;
use crate::profile::UserProfile;
use crate::settings::DisplaySettings;
use crate::temperature::WaterTemperature;
use crate::units::{LengthUnit, TemperatureUnit};
use crate::visibility::Visibility;

#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatesRecord {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub full_name: String,
}

impl From<&UserProfile> for UserProfileRecord {
    fn from(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name().to_string(),
            last_name: profile.last_name().to_string(),
            bio: profile.bio().map(str::to_string),
            profile_picture_url: profile.profile_picture_url().map(str::to_string),
            full_name: profile.full_name(),
        }
    }
}

fn to_decimal(value: f64) -> Result<Decimal, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid_format(
            "value",
            value,
            "Value must be a finite number",
        ));
    }
    Decimal::try_from(value)
        .map_err(|_| DomainError::out_of_range("value", value, "Value is not representable"))
}

fn to_f64(value: Decimal) -> Result<f64, DomainError> {
    value
        .to_f64()
        .ok_or_else(|| DomainError::out_of_range("value", value, "Value is not representable"))
}

fn logged<T>(operation: &'static str, result: Result<T, DomainError>) -> Result<T, DomainError> {
    if let Err(err) = &result {
        warn!(operation, error = %err, "rejected input");
    }
    result
}

pub fn depth_convert(value: f64, unit: LengthUnit, target: LengthUnit) -> Result<f64, DomainError> {
    debug!(value, ?unit, ?target, "depth_convert");
    logged(
        "depth_convert",
        to_decimal(value)
            .and_then(|v| Depth::new(v, unit))
            .and_then(|d| to_f64(d.convert_to(target).value())),
    )
}

pub fn visibility_convert(
    value: f64,
    unit: LengthUnit,
    target: LengthUnit,
) -> Result<f64, DomainError> {
    debug!(value, ?unit, ?target, "visibility_convert");
    logged(
        "visibility_convert",
        to_decimal(value)
            .and_then(|v| Visibility::new(v, unit))
            .and_then(|d| to_f64(d.convert_to(target).value())),
    )
}

pub fn water_temperature_convert(
    value: f64,
    unit: TemperatureUnit,
    target: TemperatureUnit,
) -> Result<f64, DomainError> {
    debug!(value, ?unit, ?target, "water_temperature_convert");
    logged(
        "water_temperature_convert",
        to_decimal(value)
            .and_then(|v| WaterTemperature::new(v, unit))
            .and_then(|t| to_f64(t.convert_to(target).value())),
    )
}

/// Label of the depth band (`Recreational`, `Deep`, ...) the depth falls in.
pub fn depth_classify(value: f64, unit: LengthUnit) -> Result<String, DomainError> {
    debug!(value, ?unit, "depth_classify");
    logged(
        "depth_classify",
        to_decimal(value)
            .and_then(|v| Depth::new(v, unit))
            .map(|d| d.classification().label().to_string()),
    )
}

pub fn coordinates_validate(
    latitude: f64,
    longitude: f64,
) -> Result<CoordinatesRecord, DomainError> {
    debug!(latitude, longitude, "coordinates_validate");
    logged(
        "coordinates_validate",
        Coordinates::new(latitude, longitude).map(|c| CoordinatesRecord {
            latitude: c.latitude(),
            longitude: c.longitude(),
        }),
    )
}

/// Validate and normalize profile fields entered in the profile editor.
pub fn user_profile_create(
    first_name: String,
    last_name: String,
    bio: Option<String>,
    profile_picture_url: Option<String>,
) -> Result<UserProfileRecord, DomainError> {
    debug!("user_profile_create");
    logged(
        "user_profile_create",
        UserProfile::new(
            &first_name,
            &last_name,
            bio.as_deref(),
            profile_picture_url.as_deref(),
        )
        .map(|p| UserProfileRecord::from(&p)),
    )
}

pub fn display_settings_from_json(json: String) -> Result<DisplaySettings, DomainError> {
    debug!(len = json.len(), "display_settings_from_json");
    logged("display_settings_from_json", DisplaySettings::from_json(&json))
}

pub fn depth_present(
    value: f64,
    unit: LengthUnit,
    settings: DisplaySettings,
) -> Result<String, DomainError> {
    debug!(value, ?unit, ?settings, "depth_present");
    logged(
        "depth_present",
        to_decimal(value)
            .and_then(|v| Depth::new(v, unit))
            .map(|d| settings.present_depth(&d)),
    )
}

pub fn visibility_present(
    value: f64,
    unit: LengthUnit,
    settings: DisplaySettings,
) -> Result<String, DomainError> {
    debug!(value, ?unit, ?settings, "visibility_present");
    logged(
        "visibility_present",
        to_decimal(value)
            .and_then(|v| Visibility::new(v, unit))
            .map(|v| settings.present_visibility(&v)),
    )
}

pub fn water_temperature_present(
    value: f64,
    unit: TemperatureUnit,
    settings: DisplaySettings,
) -> Result<String, DomainError> {
    debug!(value, ?unit, ?settings, "water_temperature_present");
    logged(
        "water_temperature_present",
        to_decimal(value)
            .and_then(|v| WaterTemperature::new(v, unit))
            .map(|t| settings.present_temperature(&t)),
    )
}
