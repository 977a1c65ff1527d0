//! API error handling
//!
//! Only transport and construction-time failures travel this path. A
//! rejected purchase is a business outcome, not an error — it is shaped
//! by the purchase handler directly and never unwinds through here.

use agentauth_intent::IntentError;
use agentauth_types::AgentAuthError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors for the issuance and parsing surfaces
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Intent parsing is not configured")]
    IntentUnavailable,

    #[error("Intent parsing failed: {0}")]
    IntentFailed(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::IntentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::IntentFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a stable error code for clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::IntentUnavailable => "INTENT_UNAVAILABLE",
            Self::IntentFailed(_) => "INTENT_FAILED",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    /// Machine-readable code
    pub code: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            code: err.error_code().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<AgentAuthError> for ApiError {
    fn from(err: AgentAuthError) -> Self {
        match err {
            AgentAuthError::InvalidInput { field, reason } => Self::InvalidInput { field, reason },
            AgentAuthError::TokenEncoding { .. } | AgentAuthError::Config { .. } => {
                tracing::error!(error = %err, "token issuance failed");
                Self::Internal
            }
        }
    }
}

impl From<IntentError> for ApiError {
    fn from(err: IntentError) -> Self {
        match err {
            IntentError::ProviderNotAvailable { .. } => Self::IntentUnavailable,
            other => Self::IntentFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = ApiError::InvalidInput {
            field: "principal".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::IntentUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_response_shape() {
        let err = ApiError::IntentUnavailable;
        let body = ErrorResponse::from(&err);
        assert!(!body.success);
        assert_eq!(body.code, "INTENT_UNAVAILABLE");
    }
}
