pub mod coordinates;
pub mod depth;
pub mod error;
pub mod ffi;
pub mod profile;
pub mod settings;
pub mod temperature;
pub mod units;
pub mod visibility;

uniffi::include_scaffolding!("subexplore");

pub use coordinates::Coordinates;
pub use depth::{Depth, DepthClass};
pub use error::DomainError;
pub use ffi::{
    coordinates_validate, depth_classify, depth_convert, depth_present,
    display_settings_from_json, user_profile_create, visibility_convert, visibility_present,
    water_temperature_convert, water_temperature_present, CoordinatesRecord, UserProfileRecord,
};
pub use profile::{FieldUpdate, ProfileUpdate, UserProfile};
pub use settings::DisplaySettings;
pub use temperature::WaterTemperature;
pub use units::{LengthUnit, TemperatureUnit};
pub use visibility::Visibility;
