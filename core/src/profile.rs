//! User profile value object.
//!
//! Names and bio are trimmed on construction. A blank bio is stored as `None`.
//! Length limits count characters, not bytes.
//!
//! # Example
//!
//! ```
//! use subexplore_core::{ProfileUpdate, UserProfile};
//!
//! let profile = UserProfile::new(" John ", " Doe ", Some("Cave diver"), None).unwrap();
//! assert_eq!(profile.full_name(), "John Doe");
//!
//! let renamed = profile.with(ProfileUpdate::new().first_name("Jane")).unwrap();
//! assert_eq!(renamed.full_name(), "Jane Doe");
//! assert_eq!(renamed.bio(), Some("Cave diver"));
//! assert_eq!(profile.first_name(), "John");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_BIO_LENGTH: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawUserProfile")]
pub struct UserProfile {
    first_name: String,
    last_name: String,
    bio: Option<String>,
    profile_picture_url: Option<String>,
}

#[derive(Deserialize)]
struct RawUserProfile {
    first_name: String,
    last_name: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    profile_picture_url: Option<String>,
}

impl TryFrom<RawUserProfile> for UserProfile {
    type Error = DomainError;

    fn try_from(raw: RawUserProfile) -> Result<Self, Self::Error> {
        UserProfile::new(
            &raw.first_name,
            &raw.last_name,
            raw.bio.as_deref(),
            raw.profile_picture_url.as_deref(),
        )
    }
}

impl UserProfile {
    pub fn new(
        first_name: &str,
        last_name: &str,
        bio: Option<&str>,
        profile_picture_url: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: validate_name("first_name", "First name", first_name)?,
            last_name: validate_name("last_name", "Last name", last_name)?,
            bio: validate_bio(bio)?,
            profile_picture_url: profile_picture_url.map(str::to_string),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn profile_picture_url(&self) -> Option<&str> {
        self.profile_picture_url.as_deref()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Build a new profile from this one with `update` applied.
    ///
    /// The result goes through the same validation as [`UserProfile::new`];
    /// `self` is left untouched.
    pub fn with(&self, update: ProfileUpdate) -> Result<Self, DomainError> {
        let first_name = update.first_name.as_deref().unwrap_or(&self.first_name);
        let last_name = update.last_name.as_deref().unwrap_or(&self.last_name);
        let bio = update.bio.resolve(self.bio.as_deref());
        let profile_picture_url = update
            .profile_picture_url
            .resolve(self.profile_picture_url.as_deref());
        Self::new(first_name, last_name, bio, profile_picture_url)
    }
}

fn validate_name(field: &'static str, label: &str, raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_format(
            field,
            raw,
            format!("{label} cannot be null or empty"),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::invalid_format(
            field,
            trimmed,
            format!("{label} cannot exceed {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_bio(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let trimmed = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(trimmed) => trimmed,
    };
    if trimmed.chars().count() > MAX_BIO_LENGTH {
        return Err(DomainError::invalid_format(
            "bio",
            trimmed,
            format!("Bio cannot exceed {MAX_BIO_LENGTH} characters"),
        ));
    }
    Ok(Some(trimmed.to_string()))
}

/// Change to an optional profile field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Retain the current value.
    Keep,
    /// Reset the field to `None`.
    Clear,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

impl FieldUpdate<String> {
    fn resolve<'a>(&'a self, current: Option<&'a str>) -> Option<&'a str> {
        match self {
            FieldUpdate::Keep => current,
            FieldUpdate::Clear => None,
            FieldUpdate::Set(value) => Some(value.as_str()),
        }
    }
}

/// Partial update for [`UserProfile::with`]. Unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: FieldUpdate<String>,
    pub profile_picture_url: FieldUpdate<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn bio(mut self, value: impl Into<String>) -> Self {
        self.bio = FieldUpdate::Set(value.into());
        self
    }

    pub fn clear_bio(mut self) -> Self {
        self.bio = FieldUpdate::Clear;
        self
    }

    pub fn profile_picture_url(mut self, value: impl Into<String>) -> Self {
        self.profile_picture_url = FieldUpdate::Set(value.into());
        self
    }

    pub fn clear_profile_picture_url(mut self) -> Self {
        self.profile_picture_url = FieldUpdate::Clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserProfile {
        UserProfile::new("John", "Doe", Some("Bio"), Some("url")).unwrap()
    }

    #[test]
    fn test_trimming() {
        let profile = UserProfile::new(" John ", " Doe ", None, None).unwrap();
        assert_eq!(profile.first_name(), "John");
        assert_eq!(profile.last_name(), "Doe");
        assert_eq!(profile.bio(), None);
        assert_eq!(profile.profile_picture_url(), None);
        assert_eq!(profile.full_name(), "John Doe");
    }

    #[test]
    fn test_blank_bio_becomes_none() {
        let profile = UserProfile::new("John", "Doe", Some("   "), None).unwrap();
        assert_eq!(profile.bio(), None);

        let profile = UserProfile::new("John", "Doe", Some("  Wreck fan \n"), None).unwrap();
        assert_eq!(profile.bio(), Some("Wreck fan"));
    }

    #[test]
    fn test_empty_names_rejected() {
        let err = UserProfile::new("", "Doe", None, None).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("First name cannot be null or empty"));

        let err = UserProfile::new("   ", "Doe", None, None).unwrap_err();
        assert!(err.to_string().contains("First name cannot be null or empty"));

        let err = UserProfile::new("John", "\t", None, None).unwrap_err();
        assert_eq!(err.field(), Some("last_name"));
        assert!(err.to_string().contains("Last name cannot be null or empty"));
    }

    #[test]
    fn test_length_limits() {
        let fifty = "a".repeat(MAX_NAME_LENGTH);
        assert!(UserProfile::new(&fifty, "Doe", None, None).is_ok());
        assert!(UserProfile::new(&format!("  {fifty}  "), "Doe", None, None).is_ok());

        let err = UserProfile::new(&"a".repeat(51), "Doe", None, None).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("cannot exceed 50 characters"));

        let err = UserProfile::new("John", &"b".repeat(51), None, None).unwrap_err();
        assert_eq!(err.field(), Some("last_name"));

        let bio = "x".repeat(MAX_BIO_LENGTH);
        assert!(UserProfile::new("John", "Doe", Some(&bio), None).is_ok());
        let err = UserProfile::new("John", "Doe", Some(&"x".repeat(501)), None).unwrap_err();
        assert_eq!(err.field(), Some("bio"));
    }

    #[test]
    fn test_length_counts_characters() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(UserProfile::new(&name, "Doe", None, None).is_ok());
    }

    #[test]
    fn test_with_partial_update() {
        let original = sample();
        let updated = original.with(ProfileUpdate::new().first_name("Jane")).unwrap();

        assert_eq!(updated.first_name(), "Jane");
        assert_eq!(updated.last_name(), "Doe");
        assert_eq!(updated.bio(), Some("Bio"));
        assert_eq!(updated.profile_picture_url(), Some("url"));

        assert_eq!(original.first_name(), "John");
        assert_eq!(original, sample());
    }

    #[test]
    fn test_with_no_changes_is_equal() {
        let original = sample();
        assert_eq!(original.with(ProfileUpdate::new()).unwrap(), original);
    }

    #[test]
    fn test_with_clears_optional_fields() {
        let updated = sample()
            .with(ProfileUpdate::new().clear_bio().clear_profile_picture_url())
            .unwrap();
        assert_eq!(updated.bio(), None);
        assert_eq!(updated.profile_picture_url(), None);

        let updated = sample().with(ProfileUpdate::new().bio("  ")).unwrap();
        assert_eq!(updated.bio(), None);
    }

    #[test]
    fn test_with_revalidates() {
        let err = sample()
            .with(ProfileUpdate::new().last_name(" "))
            .unwrap_err();
        assert!(err.is_invalid_format());
        assert_eq!(err.field(), Some("last_name"));

        let updated = sample()
            .with(ProfileUpdate::new().first_name("  Ana  ").profile_picture_url("https://cdn/a.png"))
            .unwrap();
        assert_eq!(updated.first_name(), "Ana");
        assert_eq!(updated.profile_picture_url(), Some("https://cdn/a.png"));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(sample(), UserProfile::new(" John", "Doe ", Some(" Bio "), Some("url")).unwrap());
        assert_ne!(sample(), UserProfile::new("John", "Doe", Some("Bio"), None).unwrap());
    }

    #[test]
    fn test_serde_normalizes_and_validates() {
        let parsed: UserProfile =
            serde_json::from_str(r#"{"first_name":" Sylvia ","last_name":"Earle","bio":""}"#)
                .unwrap();
        assert_eq!(parsed.first_name(), "Sylvia");
        assert_eq!(parsed.bio(), None);

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(serde_json::from_str::<UserProfile>(&json).unwrap(), parsed);

        let err = serde_json::from_str::<UserProfile>(r#"{"first_name":"","last_name":"Earle"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("First name cannot be null or empty"));
    }
}
