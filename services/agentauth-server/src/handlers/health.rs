//! Health endpoints

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe
pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Current server time in milliseconds
pub async fn server_time() -> Json<Value> {
    Json(json!({ "serverTime": chrono::Utc::now().timestamp_millis() }))
}
