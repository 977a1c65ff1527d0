//! Verification outcomes and the policy-rejection taxonomy
//!
//! Verification failure is an expected business outcome, not an
//! exceptional circumstance. Rejections are returned as data so relying
//! parties can branch on the kind, and the human-readable reason string is
//! rendered only at the presentation boundary via `Display`.

use crate::{AgentName, AuthorizationClaims};
use std::fmt;

/// Result of one verification call: fully valid, or rejected for exactly
/// one reason. There is no partial validity.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// All checks passed; carries the recovered (trusted) claim set
    Valid(AuthorizationClaims),
    /// The first failing check in the predicate chain
    Invalid(PolicyRejection),
}

impl VerificationOutcome {
    /// Whether the token was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The recovered claim set, when valid
    pub fn claims(&self) -> Option<&AuthorizationClaims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Invalid(_) => None,
        }
    }

    /// The rejection, when invalid
    pub fn rejection(&self) -> Option<&PolicyRejection> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(rejection) => Some(rejection),
        }
    }
}

/// The closed set of reasons a structurally decodable verification call
/// can reject a token. Structural corruption and wrong-algorithm tokens
/// fold into `Signature` so probing callers learn nothing about token
/// internals.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyRejection {
    /// Malformed token, wrong algorithm, or signature mismatch
    Signature,
    /// Current time is at or past `expiresAt`
    Expired,
    /// Token presented by an agent other than the one it was issued to
    AgentMismatch {
        /// The agent presenting the token
        requesting: AgentName,
        /// The agent the token is bound to
        bound: AgentName,
    },
    /// The required scope is not in the token's scope list
    ScopeDenied { required: String },
    /// The requested amount exceeds the authorized limit
    LimitExceeded { amount: f64, limit: f64 },
}

impl PolicyRejection {
    /// Stable machine-readable code for logs and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::Signature => "INVALID_SIGNATURE",
            Self::Expired => "TOKEN_EXPIRED",
            Self::AgentMismatch { .. } => "AGENT_MISMATCH",
            Self::ScopeDenied { .. } => "SCOPE_DENIED",
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
        }
    }
}

impl fmt::Display for PolicyRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signature => write!(f, "Invalid token signature"),
            Self::Expired => write!(f, "Token has expired"),
            Self::AgentMismatch { requesting, bound } => write!(
                f,
                "Agent '{}' cannot use token issued to '{}'",
                requesting, bound
            ),
            Self::ScopeDenied { required } => {
                write!(f, "Scope '{}' not authorized", required)
            }
            Self::LimitExceeded { amount, limit } => {
                write!(f, "Amount ${} exceeds limit of ${}", amount, limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(
            PolicyRejection::Signature.to_string(),
            "Invalid token signature"
        );
        assert_eq!(PolicyRejection::Expired.to_string(), "Token has expired");
        assert_eq!(
            PolicyRejection::AgentMismatch {
                requesting: AgentName::new("agent_analytics"),
                bound: AgentName::new("agent_shopping"),
            }
            .to_string(),
            "Agent 'agent_analytics' cannot use token issued to 'agent_shopping'"
        );
        assert_eq!(
            PolicyRejection::ScopeDenied {
                required: "email_send".to_string()
            }
            .to_string(),
            "Scope 'email_send' not authorized"
        );
    }

    #[test]
    fn test_amount_rendering_trims_integral_values() {
        let rejection = PolicyRejection::LimitExceeded {
            amount: 60.0,
            limit: 50.0,
        };
        assert_eq!(rejection.to_string(), "Amount $60 exceeds limit of $50");

        let fractional = PolicyRejection::LimitExceeded {
            amount: 50.5,
            limit: 50.0,
        };
        assert_eq!(fractional.to_string(), "Amount $50.5 exceeds limit of $50");
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(PolicyRejection::Signature.code(), "INVALID_SIGNATURE");
        assert_eq!(
            PolicyRejection::ScopeDenied {
                required: "x".to_string()
            }
            .code(),
            "SCOPE_DENIED"
        );
    }
}
