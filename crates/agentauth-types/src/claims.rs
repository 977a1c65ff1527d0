//! The authorization claim set carried by every AgentAuth token
//!
//! The claim set is the agent-native "currency of authority": a bounded,
//! expiring, scope-limited delegation from a principal to one named agent.
//! It is immutable once issued; the signed token is its only transport.

use crate::{AgentName, PrincipalId, ScopeList};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The signed payload of an AgentAuth token.
///
/// Field names on the wire are fixed by the token encoding (`issuedAt`,
/// `expiresAt`); do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationClaims {
    /// The human or account granting authority
    pub principal: PrincipalId,
    /// The agent instance this authority is bound to
    pub agent: AgentName,
    /// Permission scopes the token authorizes
    pub scope: ScopeList,
    /// Spending ceiling, denominated in `currency`
    pub limit: f64,
    /// ISO-style currency code
    pub currency: String,
    /// When the token was issued (set by the issuer, never by callers)
    pub issued_at: DateTime<Utc>,
    /// When the claim set becomes void
    pub expires_at: DateTime<Utc>,
    /// Fixed identifier of the signing authority
    pub issuer: String,
}

impl AuthorizationClaims {
    /// Check expiry against an explicit clock. Expiry is inclusive: a
    /// token is void at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check expiry against the wall clock
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time remaining until expiry, or `None` once expired
    pub fn time_until_expiry(&self) -> Option<Duration> {
        let now = Utc::now();
        if now >= self.expires_at {
            None
        } else {
            Some(self.expires_at - now)
        }
    }

    /// Whether the token authorizes the given scope
    pub fn allows_scope(&self, scope: &str) -> bool {
        self.scope.allows(scope)
    }

    /// Whether the token's limit covers the given amount (equality passes)
    pub fn covers_amount(&self, amount: f64) -> bool {
        amount <= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_claims() -> AuthorizationClaims {
        let now = Utc::now();
        AuthorizationClaims {
            principal: PrincipalId::new("user_123"),
            agent: AgentName::new("agent_shopping"),
            scope: ScopeList::from_slices(&["cloud_purchase"]),
            limit: 50.0,
            currency: "USD".to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(60),
            issuer: "AgentAuth".to_string(),
        }
    }

    #[test]
    fn test_expiry_is_inclusive() {
        let claims = test_claims();
        assert!(!claims.is_expired_at(claims.expires_at - Duration::milliseconds(1)));
        assert!(claims.is_expired_at(claims.expires_at));
        assert!(claims.is_expired_at(claims.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_limit_equality_passes() {
        let claims = test_claims();
        assert!(claims.covers_amount(50.0));
        assert!(claims.covers_amount(20.0));
        assert!(!claims.covers_amount(50.01));
    }

    #[test]
    fn test_wire_field_names() {
        let claims = test_claims();
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("issuedAt").is_some());
        assert!(json.get("expiresAt").is_some());
        assert!(json.get("principal").is_some());
        assert_eq!(json["issuer"], "AgentAuth");

        let back: AuthorizationClaims = serde_json::from_value(json).unwrap();
        assert_eq!(back, claims);
    }
}
