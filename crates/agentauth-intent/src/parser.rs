//! Natural-language → structured authorization request
//!
//! The model reply is treated as hostile input until it survives three
//! gates: injection screening, strict JSON parsing, and normalization.

use crate::provider::IntentProvider;
use crate::types::{IntentError, ParsedAuthorization, RawAuthorization, Result};
use std::sync::Arc;

/// Patterns in a model reply that indicate the user text tried to steer
/// the parser instead of describing a grant.
const INJECTION_PATTERNS: &[&str] = &[
    "ignore previous",
    "ignore all previous",
    "bypass",
    "disregard",
    "system prompt",
    "you are now",
];

const SYSTEM_PROMPT: &str = r#"You are an authorization parser for AgentAuth. Extract structured data from natural language authorization requests.

Return ONLY valid JSON with these fields:
- agent: string (the agent being authorized, e.g., 'shopping_assistant', 'email_bot')
- scope: string[] (permission scopes, e.g., ['cloud_purchase', 'email_read', 'email_send'])
- limit: number or null (spending limit if mentioned, null if not applicable)
- currency: string (default 'USD')
- durationMinutes: number (how long authorization lasts, default 60)

Examples:
Input: 'Let my shopping assistant spend up to $50 on cloud services for the next hour'
Output: {"agent": "shopping_assistant", "scope": ["cloud_purchase"], "limit": 50, "currency": "USD", "durationMinutes": 60}

Input: 'Allow email bot to read and send emails for 24 hours'
Output: {"agent": "email_bot", "scope": ["email_read", "email_send"], "limit": null, "currency": "USD", "durationMinutes": 1440}

Input: 'Give my analytics agent access to view reports'
Output: {"agent": "analytics_agent", "scope": ["reports_view"], "limit": null, "currency": "USD", "durationMinutes": 60}

Always return valid JSON only, no markdown or explanation."#;

/// Parses natural-language delegation requests through an LLM provider.
pub struct IntentParser {
    provider: Arc<dyn IntentProvider>,
}

impl IntentParser {
    /// Create a parser over the given provider
    pub fn new(provider: Arc<dyn IntentProvider>) -> Self {
        Self { provider }
    }

    /// Translate a natural-language description into a normalized
    /// authorization request.
    pub async fn parse(&self, description: &str) -> Result<ParsedAuthorization> {
        if description.trim().is_empty() {
            return Err(IntentError::InvalidReply {
                message: "description must not be empty".to_string(),
            });
        }

        let reply = self.provider.complete(SYSTEM_PROMPT, description).await?;
        tracing::debug!(provider = self.provider.name(), "received intent reply");

        let parsed = Self::screen_and_parse(&reply)?;
        tracing::info!(
            agent = %parsed.agent,
            scope = ?parsed.scope,
            limit = ?parsed.limit,
            "parsed authorization intent"
        );
        Ok(parsed)
    }

    /// Screen a raw model reply, parse it, and normalize the result.
    fn screen_and_parse(reply: &str) -> Result<ParsedAuthorization> {
        let reply = strip_code_fences(reply);
        check_injection(reply)?;

        let raw: RawAuthorization =
            serde_json::from_str(reply).map_err(|e| IntentError::InvalidReply {
                message: e.to_string(),
            })?;

        normalize(raw)
    }
}

/// Apply the collaborator-side defaults. The token issuer never does this.
fn normalize(raw: RawAuthorization) -> Result<ParsedAuthorization> {
    let agent = match raw.agent {
        Some(agent) if !agent.trim().is_empty() => agent,
        _ => {
            return Err(IntentError::InvalidReply {
                message: "reply names no agent".to_string(),
            })
        }
    };

    let scope = match raw.scope {
        Some(scope) if !scope.is_empty() => {
            if scope.iter().any(|s| s.trim().is_empty()) {
                return Err(IntentError::InvalidReply {
                    message: "reply contains a blank scope".to_string(),
                });
            }
            scope
        }
        _ => vec!["general".to_string()],
    };

    if let Some(limit) = raw.limit {
        if !limit.is_finite() || limit < 0.0 {
            return Err(IntentError::InvalidReply {
                message: format!("reply proposes an unusable limit: {limit}"),
            });
        }
    }

    let duration_minutes = match raw.duration_minutes {
        Some(minutes) if minutes.is_finite() && minutes > 0.0 => minutes,
        _ => 60.0,
    };

    Ok(ParsedAuthorization {
        agent,
        scope,
        limit: raw.limit,
        currency: raw
            .currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "USD".to_string()),
        duration_minutes,
    })
}

fn check_injection(reply: &str) -> Result<()> {
    let lower = reply.to_lowercase();
    for pattern in INJECTION_PATTERNS {
        if lower.contains(pattern) {
            return Err(IntentError::SuspectOutput {
                pattern: pattern.to_string(),
            });
        }
    }
    Ok(())
}

/// Models sometimes wrap JSON in a markdown fence despite instructions.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}
