//! Purchase authorization handler
//!
//! Collaborator boundary B: the relying party ("merchant") surface. A
//! rejected token is an expected business outcome — it is answered with
//! the rejection reason, never treated as an internal fault.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use agentauth_types::VerificationContext;

use crate::dto::{PurchaseRequest, PurchaseResponse, TransactionRecord};
use crate::state::AppState;

/// Gate a purchase on a presented bearer token
pub async fn purchase(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<PurchaseRequest>,
) -> (StatusCode, Json<PurchaseResponse>) {
    let token = match bearer_token(&headers) {
        Some(token) => token,
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(PurchaseResponse::rejected(
                    "Missing or invalid authorization header",
                )),
            );
        }
    };

    let mut context = VerificationContext::new(request.scope.clone(), request.amount);
    if let Some(agent) = &request.requesting_agent {
        context = context.with_requesting_agent(agent.as_str());
    }

    let outcome = state.verifier.verify(token, &context);

    match outcome.claims() {
        Some(claims) => {
            // The authorization record comes from the recovered claim
            // set, not from anything the caller sent
            tracing::info!(
                item = %request.item,
                amount = request.amount,
                principal = %claims.principal,
                agent = %claims.agent,
                "purchase authorized"
            );
            (
                StatusCode::OK,
                Json(PurchaseResponse::authorized(TransactionRecord {
                    item: request.item,
                    amount: request.amount,
                    authorized_by: claims.principal.to_string(),
                    agent: claims.agent.to_string(),
                })),
            )
        }
        None => {
            let rejection = outcome.rejection().expect("invalid outcome has rejection");
            tracing::info!(
                item = %request.item,
                amount = request.amount,
                code = rejection.code(),
                "purchase rejected"
            );
            (
                StatusCode::FORBIDDEN,
                Json(PurchaseResponse::rejected(rejection.to_string())),
            )
        }
    }
}

/// Extract the bearer credential from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
