//! Token configuration
//!
//! The shared signing secret is deliberately NOT a hidden global: it is
//! carried in a config value handed to both issuer and verifier, so tests
//! can run with distinct keys per test.

use agentauth_types::{AgentAuthError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed identifier of the signing authority, stamped into every claim set.
pub const DEFAULT_ISSUER: &str = "AgentAuth";

/// Configuration shared by [`crate::TokenIssuer`] and [`crate::TokenVerifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens (at least 256 bits)
    pub secret: String,
    /// Issuer claim stamped into tokens
    pub issuer: String,
    /// Default authorization lifetime, for collaborators that let the
    /// caller omit a duration. The issuer itself never applies it.
    #[serde(with = "humantime_serde")]
    pub default_duration: Duration,
    /// Treat a zero or negative requested duration as a construction-time
    /// error instead of issuing an already-expired token
    pub reject_non_positive_duration: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set in production
            issuer: DEFAULT_ISSUER.to_string(),
            default_duration: Duration::from_secs(60 * 60),
            reject_non_positive_duration: false,
        }
    }
}

impl TokenConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(secret) = std::env::var("AGENTAUTH_SECRET") {
            config.secret = secret;
        }
        if let Ok(issuer) = std::env::var("AGENTAUTH_ISSUER") {
            config.issuer = issuer;
        }

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(AgentAuthError::config("signing secret must be set"));
        }
        if self.secret.len() < 32 {
            return Err(AgentAuthError::config(
                "signing secret should be at least 256 bits (32 bytes)",
            ));
        }
        if self.issuer.trim().is_empty() {
            return Err(AgentAuthError::config("issuer must not be empty"));
        }
        Ok(())
    }
}
