//! Common types for intent parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while translating a natural-language request
#[derive(Error, Debug)]
pub enum IntentError {
    #[error("Provider not available: {provider}")]
    ProviderNotAvailable { provider: String },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Invalid reply from model: {message}")]
    InvalidReply { message: String },

    #[error("Suspect model output: matched pattern {pattern:?}")]
    SuspectOutput { pattern: String },
}

pub type Result<T> = std::result::Result<T, IntentError>;

/// The structured authorization request recovered from natural language,
/// after normalization. `limit: None` means the request named no spending
/// amount; deciding what "no limit" means belongs to the caller, not the
/// token issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAuthorization {
    /// The agent being authorized
    pub agent: String,
    /// Permission scopes
    pub scope: Vec<String>,
    /// Spending limit, if one was named
    pub limit: Option<f64>,
    /// Currency code
    pub currency: String,
    /// Authorization lifetime in minutes
    pub duration_minutes: f64,
}

/// The raw shape the model replies with, before normalization. Every
/// field is optional because model output is untrusted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAuthorization {
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub scope: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<f64>,
}
