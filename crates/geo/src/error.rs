//! Error types for the geocoordinates crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while constructing or converting geo values.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude or longitude outside its valid range
    #[error("{name} out of range: {value} (must be between {min} and {max})")]
    OutOfRange {
        /// Name of the offending coordinate
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Malformed input, such as an unclosed ring or a short coordinate array
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Human readable reason
        reason: String,
    },

    /// A required input was absent
    #[error("Missing required argument `{0}`")]
    NullArgument(&'static str),

    /// Invalid WKT format
    #[error("Invalid WKT format: {0}")]
    InvalidWkt(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with host error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Coordinate outside its valid range
    OutOfRange = 10001,
    /// Malformed argument
    InvalidArgument = 10002,
    /// Absent argument
    NullArgument = 10003,
    /// Invalid WKT format
    InvalidWkt = 10004,
    /// JSON parsing error
    JsonParsing = 10005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::OutOfRange { .. } => GeoErrorCode::OutOfRange,
            GeoError::InvalidArgument { .. } => GeoErrorCode::InvalidArgument,
            GeoError::NullArgument(_) => GeoErrorCode::NullArgument,
            GeoError::InvalidWkt(_) => GeoErrorCode::InvalidWkt,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeoError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = GeoError::OutOfRange {
            name: "latitude",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "latitude out of range: 91 (must be between -90 and 90)"
        );
        assert_eq!(err.code(), GeoErrorCode::OutOfRange);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::invalid("shape", "too short").code() as u32, 10002);
        assert_eq!(GeoError::NullArgument("shape").code() as u32, 10003);
        assert_eq!(GeoError::InvalidWkt("x".into()).code() as u32, 10004);
    }
}
