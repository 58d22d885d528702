//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when a value fails its field rule.
///
/// Inside the chat wizard these are never fatal: a rejected answer is
/// re-prompted at the same step. Other layers (request bodies, restored
/// conversation state) surface them to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' exceeds {max} characters (got {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' contains content that is not allowed")]
    ForbiddenContent { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a too long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a forbidden content validation error.
    pub fn forbidden_content(field: impl Into<String>) -> Self {
        ValidationError::ForbiddenContent { field: field.into() }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::ForbiddenContent { field } => field,
        }
    }

    /// Error code matching this variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::TooLong { .. } => ErrorCode::TooLong,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::ForbiddenContent { .. } => ErrorCode::ForbiddenContent,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    TooLong,
    InvalidFormat,
    ForbiddenContent,

    // Throttling
    RateLimited,

    // Scoring / AI errors
    ScoringFailed,
    AIProviderError,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ForbiddenContent => "FORBIDDEN_CONTENT",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::ScoringFailed => "SCORING_FAILED",
            ErrorCode::AIProviderError => "AI_PROVIDER_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("nombre");
        assert_eq!(format!("{}", err), "Field 'nombre' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("latitude", -90.0, 90.0, 120.5);
        assert_eq!(
            format!("{}", err),
            "Field 'latitude' must be between -90 and 90, got 120.5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("cedula", "must have 9 or 10 digits");
        assert_eq!(
            format!("{}", err),
            "Field 'cedula' has invalid format: must have 9 or 10 digits"
        );
    }

    #[test]
    fn field_returns_field_name_for_every_variant() {
        assert_eq!(ValidationError::empty_field("a").field(), "a");
        assert_eq!(ValidationError::too_long("b", 1, 2).field(), "b");
        assert_eq!(ValidationError::forbidden_content("c").field(), "c");
    }

    #[test]
    fn code_matches_variant() {
        assert_eq!(ValidationError::empty_field("x").code(), ErrorCode::EmptyField);
        assert_eq!(
            ValidationError::invalid_format("x", "y").code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::RateLimited), "RATE_LIMITED");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
