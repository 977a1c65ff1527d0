//! Intent parsing handler
//!
//! Front half of collaborator boundary A: natural language in, normalized
//! structured authorization request out.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dto::{ParseRequest, ParseResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Translate a natural-language authorization request
pub async fn parse_authorization(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ParseRequest>,
) -> ApiResult<Json<ParseResponse>> {
    let parser = state.intent.as_ref().ok_or(ApiError::IntentUnavailable)?;

    let parsed = parser.parse(&request.description).await?;

    Ok(Json(ParseResponse {
        success: true,
        parsed,
    }))
}
