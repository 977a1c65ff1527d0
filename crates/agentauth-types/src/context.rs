//! Per-call verification context
//!
//! Supplied by the relying party for one verification call and never
//! persisted. Context fields are compared AGAINST the recovered claim set;
//! they are never substituted into it.

use crate::AgentName;
use serde::{Deserialize, Serialize};

/// What the relying party wants the token to authorize right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationContext {
    /// The single scope the requested action requires
    pub required_scope: String,
    /// The amount the requested action would spend
    pub amount: f64,
    /// Identity of the agent presenting the token, when known. Absent
    /// means the transport could not attribute the caller; the
    /// agent-binding check is skipped.
    pub requesting_agent: Option<AgentName>,
}

impl VerificationContext {
    /// Context without a presenting-agent identity
    pub fn new(required_scope: impl Into<String>, amount: f64) -> Self {
        Self {
            required_scope: required_scope.into(),
            amount,
            requesting_agent: None,
        }
    }

    /// Attach the presenting agent's identity, enabling the binding check
    pub fn with_requesting_agent(mut self, agent: impl Into<AgentName>) -> Self {
        self.requesting_agent = Some(agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = VerificationContext::new("cloud_purchase", 20.0)
            .with_requesting_agent("agent_shopping");
        assert_eq!(ctx.required_scope, "cloud_purchase");
        assert_eq!(ctx.amount, 20.0);
        assert_eq!(ctx.requesting_agent, Some(AgentName::new("agent_shopping")));
    }
}
