//! Error types for AgentAuth
//!
//! Construction-time and infrastructure failures only. Verification-time
//! policy rejections are NOT errors — they are ordinary values
//! ([`crate::PolicyRejection`]) because a rejected token is an expected
//! outcome of the protocol.

use thiserror::Error;

/// Result type for AgentAuth operations
pub type Result<T> = std::result::Result<T, AgentAuthError>;

/// AgentAuth error types
#[derive(Debug, Clone, Error)]
pub enum AgentAuthError {
    /// Malformed or missing field supplied to the issuer
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    /// Token serialization or signing failed
    #[error("Token encoding failed: {message}")]
    TokenEncoding { message: String },

    /// Invalid issuer/verifier configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AgentAuthError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get an error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::TokenEncoding { .. } => "TOKEN_ENCODING_FAILED",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AgentAuthError::invalid_input("principal", "must not be empty");
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(
            err.to_string(),
            "Invalid input: principal - must not be empty"
        );
    }
}
