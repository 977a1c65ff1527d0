//! Request and response bodies
//!
//! Wire names follow the established AgentAuth API (`expiresInMinutes`,
//! `requestingAgent`, `authorizedBy`).

use agentauth_intent::ParsedAuthorization;
use agentauth_types::AuthorizationClaims;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/authorize`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub principal: String,
    pub agent: String,
    pub scope: Vec<String>,
    pub limit: f64,
    pub currency: String,
    /// Relative lifetime; `durationMinutes` is accepted as an alias for
    /// callers that feed the intent parser's output straight in. Absent
    /// means the configured default lifetime.
    #[serde(default, alias = "durationMinutes")]
    pub expires_in_minutes: Option<f64>,
}

/// Reply of `POST /api/v1/authorize`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    pub success: bool,
    pub token: String,
    pub payload: AuthorizationClaims,
}

/// Body of `POST /api/v1/purchase`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub item: String,
    pub amount: f64,
    pub scope: String,
    /// Identity the caller claims for the presenting agent; absent means
    /// the agent-binding check is skipped
    #[serde(default)]
    pub requesting_agent: Option<String>,
}

/// Reply of `POST /api/v1/purchase`, for both accepted and rejected
/// purchases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<TransactionRecord>,
}

impl PurchaseResponse {
    pub fn authorized(transaction: TransactionRecord) -> Self {
        Self {
            success: true,
            message: "Purchase authorized".to_string(),
            reason: None,
            transaction: Some(transaction),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "Purchase rejected".to_string(),
            reason: Some(reason.into()),
            transaction: None,
        }
    }
}

/// The authorization record returned for a released purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub item: String,
    pub amount: f64,
    /// Principal from the RECOVERED claim set, never from caller input
    pub authorized_by: String,
    /// Agent from the recovered claim set
    pub agent: String,
}

/// Body of `POST /api/v1/parse`
#[derive(Debug, Clone, Deserialize)]
pub struct ParseRequest {
    pub description: String,
}

/// Reply of `POST /api/v1/parse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub success: bool,
    pub parsed: ParsedAuthorization,
}
