//! Authorization grant handler
//!
//! Accepts a structured grant request and asks the issuer to sign it.
//! The only defaulting that happens here is the omitted duration; a
//! malformed value is a caller error.

use axum::{extract::State, Json};
use std::sync::Arc;

use agentauth_token::IssueRequest;
use agentauth_types::{AgentName, PrincipalId, ScopeList};

use crate::dto::{AuthorizeRequest, AuthorizeResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Issue a signed authorization token for an agent
pub async fn authorize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuthorizeRequest>,
) -> ApiResult<Json<AuthorizeResponse>> {
    // Defaulting an omitted duration is this boundary's job, not the
    // issuer's
    let duration_minutes = request
        .expires_in_minutes
        .unwrap_or_else(|| state.default_duration.as_secs_f64() / 60.0);

    let issue_request = IssueRequest {
        principal: PrincipalId::new(request.principal),
        agent: AgentName::new(request.agent),
        scope: ScopeList::new(request.scope),
        limit: request.limit,
        currency: request.currency,
        duration_minutes,
    };

    let grant = state.issuer.grant(&issue_request)?;

    tracing::info!(
        principal = %grant.claims.principal,
        agent = %grant.claims.agent,
        limit = grant.claims.limit,
        expires_at = %grant.claims.expires_at,
        "authorization granted"
    );

    Ok(Json(AuthorizeResponse {
        success: true,
        token: grant.token,
        payload: grant.claims,
    }))
}
