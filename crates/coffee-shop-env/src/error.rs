//! Error types for loading and validating the environment

use thiserror::Error;

/// Errors raised while building, loading or validating an [`Environment`](crate::Environment)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid URL for {field} ({value}): {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },

    #[error("Failed to serialize configuration: {details}")]
    SerializeError { details: String },

    #[error("Unknown build mode '{0}', expected 'development' or 'production'")]
    InvalidBuildMode(String),
}

impl ConfigurationError {
    /// Name of the offending field, when the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidUrl { field, .. }
            | Self::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::ParseError {
            details: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        let err = ConfigurationError::MissingField {
            field: "auth0.clientId",
        };
        assert_eq!(err.field(), Some("auth0.clientId"));
        assert_eq!(err.to_string(), "Missing required field: auth0.clientId");

        let err = ConfigurationError::ParseError {
            details: "bad".to_string(),
        };
        assert_eq!(err.field(), None);
    }
}
