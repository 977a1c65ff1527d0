//! Identity types for AgentAuth
//!
//! Principals and agents are identified by caller-supplied strings
//! (`user_123`, `agent_shopping`). The wrappers are strongly typed to
//! prevent accidental mixing of the two roles, which is the entire point
//! of the agent-binding check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate string-backed identity types with common implementations
macro_rules! define_actor_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier is empty or whitespace-only
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_actor_id!(PrincipalId, "Identifier of the human or account delegating authority");
define_actor_id!(AgentName, "Identifier of the agent instance a token is bound to");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_round_trip() {
        let id = AgentName::new("agent_shopping");
        assert_eq!(id.as_str(), "agent_shopping");
        assert_eq!(id.to_string(), "agent_shopping");
        assert_eq!(AgentName::from("agent_shopping"), id);
    }

    #[test]
    fn test_blank_detection() {
        assert!(PrincipalId::new("").is_blank());
        assert!(PrincipalId::new("   ").is_blank());
        assert!(!PrincipalId::new("user_123").is_blank());
    }

    #[test]
    fn test_serde_transparency() {
        let id = AgentName::new("agent_shopping");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"agent_shopping\"");

        let back: AgentName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
