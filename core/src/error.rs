use thiserror::Error;

/// Error type for value-object construction and settings loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{message} (field `{field}`, value `{value}`)")]
    OutOfRange {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("{message} (field `{field}`, value `{value}`)")]
    InvalidFormat {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("invalid settings: {message}")]
    InvalidSettings { message: String },
}

impl DomainError {
    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        DomainError::OutOfRange {
            field,
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_format(
        field: &'static str,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        DomainError::InvalidFormat {
            field,
            value: value.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::OutOfRange { field, .. } | DomainError::InvalidFormat { field, .. } => {
                Some(field)
            }
            DomainError::InvalidSettings { .. } => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::OutOfRange { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, DomainError::InvalidFormat { .. })
    }
}
