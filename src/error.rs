//! Error types for resume conversion.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{FieldError, ParseError, ValidationError};
use thiserror::Error;

/// Errors that abort the conversion of a record.
///
/// The first failing field wins; no partial resume is ever produced.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A field's value violates its contract
    #[error("{field}: {source}")]
    Validation {
        field: String,
        #[source]
        source: ValidationError,
    },

    /// A field's literal could not be parsed
    #[error("{field}: {source}")]
    Parse {
        field: String,
        #[source]
        source: ParseError,
    },

    /// The input is not shaped like a resume record at all
    #[error("Malformed resume record: {0}")]
    Input(#[from] serde_json::Error),
}

impl ConversionError {
    pub fn validation(field: impl Into<String>, source: ValidationError) -> Self {
        Self::Validation {
            field: field.into(),
            source,
        }
    }

    pub fn field(field: impl Into<String>, source: FieldError) -> Self {
        match source {
            FieldError::Validation(source) => Self::Validation {
                field: field.into(),
                source,
            },
            FieldError::Parse(source) => Self::Parse {
                field: field.into(),
                source,
            },
        }
    }

    /// The path of the offending field, if the error concerns one.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::Parse { field, .. } => Some(field),
            Self::Input(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConversionError
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::validation("profile.email", ValidationError::MissingField);
        assert_eq!(err.to_string(), "profile.email: Required value missing");
        assert_eq!(err.field_path(), Some("profile.email"));

        let err = ConfigError::InvalidValue {
            var: "RESUME_NUMBER_SCALE".to_string(),
            reason: "Must be 1, 2 or 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for RESUME_NUMBER_SCALE: Must be 1, 2 or 3"
        );
    }

    #[test]
    fn test_field_error_keeps_kind() {
        let err = ConversionError::field(
            "education[0].startDate",
            FieldError::Parse(ParseError::InvalidYearMonth {
                input: "2018".to_string(),
            }),
        );
        assert!(matches!(err, ConversionError::Parse { .. }));
        assert!(err.to_string().starts_with("education[0].startDate: "));

        let err = ConversionError::field(
            "education[0].startDate",
            FieldError::Validation(ValidationError::MissingStartDate),
        );
        assert!(matches!(err, ConversionError::Validation { .. }));
    }
}
