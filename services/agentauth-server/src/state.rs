//! Application state

use agentauth_intent::IntentParser;
use agentauth_token::{TokenIssuer, TokenVerifier};
use std::time::Duration;

/// Shared application state. Read-only after startup, so handlers can
/// run concurrently without coordination.
pub struct AppState {
    /// Signs authorization grants
    pub issuer: TokenIssuer,
    /// Validates presented tokens
    pub verifier: TokenVerifier,
    /// Lifetime applied when a grant request names no duration
    pub default_duration: Duration,
    /// Natural-language intent parser, when a provider is configured
    pub intent: Option<IntentParser>,
}
