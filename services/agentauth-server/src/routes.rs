//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API v1 routes
fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        // General endpoints
        .route("/ping", get(handlers::health::ping))
        .route("/time", get(handlers::health::server_time))
        // Grant side
        .route("/authorize", post(handlers::authorize::authorize))
        .route("/parse", post(handlers::parse::parse_authorization))
        // Relying-party side
        .route("/purchase", post(handlers::purchase::purchase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentauth_intent::{IntentParser, IntentProvider};
    use agentauth_token::{TokenConfig, TokenIssuer, TokenVerifier};
    use async_trait::async_trait;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_config() -> TokenConfig {
        TokenConfig {
            secret: "server-test-secret-key-of-32-bytes!!".to_string(),
            ..Default::default()
        }
    }

    fn test_server(intent: Option<IntentParser>) -> TestServer {
        let config = test_config();
        let state = Arc::new(AppState {
            issuer: TokenIssuer::new(config.clone()).unwrap(),
            verifier: TokenVerifier::new(config.clone()).unwrap(),
            default_duration: config.default_duration,
            intent,
        });
        TestServer::new(create_router(state)).unwrap()
    }

    fn authorize_body() -> Value {
        json!({
            "principal": "user_123",
            "agent": "agent_shopping",
            "scope": ["cloud_purchase"],
            "limit": 50,
            "currency": "USD",
            "expiresInMinutes": 60
        })
    }

    async fn issue_token(server: &TestServer) -> String {
        let response = server.post("/api/v1/authorize").json(&authorize_body()).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["payload"]["issuer"], "AgentAuth");
        body["token"].as_str().unwrap().to_string()
    }

    fn bearer(token: &str) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let server = test_server(None);
        let response = server.get("/api/v1/ping").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_authorize_defaults_omitted_duration() {
        let server = test_server(None);
        let mut body = authorize_body();
        body.as_object_mut().unwrap().remove("expiresInMinutes");

        let response = server.post("/api/v1/authorize").json(&body).await;
        response.assert_status_ok();

        let reply: Value = response.json();
        let issued = reply["payload"]["issuedAt"].as_str().unwrap();
        let expires = reply["payload"]["expiresAt"].as_str().unwrap();
        let issued: chrono::DateTime<chrono::Utc> = issued.parse().unwrap();
        let expires: chrono::DateTime<chrono::Utc> = expires.parse().unwrap();
        assert_eq!(expires - issued, chrono::Duration::minutes(60));
    }

    #[tokio::test]
    async fn test_authorize_rejects_malformed_input() {
        let server = test_server(None);
        let mut body = authorize_body();
        body["principal"] = json!("");

        let response = server.post("/api/v1/authorize").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let reply: Value = response.json();
        assert_eq!(reply["success"], false);
        assert_eq!(reply["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_purchase_without_header_is_unauthorized() {
        let server = test_server(None);
        let response = server
            .post("/api/v1/purchase")
            .json(&json!({
                "item": "Cloud Credits",
                "amount": 20,
                "scope": "cloud_purchase"
            }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["reason"], "Missing or invalid authorization header");
    }

    #[tokio::test]
    async fn test_purchase_within_limit_is_authorized() {
        let server = test_server(None);
        let token = issue_token(&server).await;

        let response = server
            .post("/api/v1/purchase")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({
                "item": "Cloud Credits",
                "amount": 20,
                "scope": "cloud_purchase",
                "requestingAgent": "agent_shopping"
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Purchase authorized");
        // Authorization record comes from the recovered claim set
        assert_eq!(body["transaction"]["authorizedBy"], "user_123");
        assert_eq!(body["transaction"]["agent"], "agent_shopping");
    }

    #[tokio::test]
    async fn test_stolen_token_is_rejected() {
        let server = test_server(None);
        let token = issue_token(&server).await;

        // agent_analytics presents agent_shopping's token; scope and
        // amount are otherwise fine
        let response = server
            .post("/api/v1/purchase")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({
                "item": "Premium Data Export",
                "amount": 30,
                "scope": "cloud_purchase",
                "requestingAgent": "agent_analytics"
            }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Purchase rejected");
        assert_eq!(
            body["reason"],
            "Agent 'agent_analytics' cannot use token issued to 'agent_shopping'"
        );
    }

    #[tokio::test]
    async fn test_over_limit_purchase_is_rejected() {
        let server = test_server(None);
        let token = issue_token(&server).await;

        let response = server
            .post("/api/v1/purchase")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({
                "item": "GPU Cluster",
                "amount": 60,
                "scope": "cloud_purchase"
            }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let body: Value = response.json();
        assert_eq!(body["reason"], "Amount $60 exceeds limit of $50");
    }

    #[tokio::test]
    async fn test_tampered_token_is_rejected() {
        let server = test_server(None);
        let token = issue_token(&server).await;
        let tampered = format!("{}x", token);

        let response = server
            .post("/api/v1/purchase")
            .add_header(header::AUTHORIZATION, bearer(&tampered))
            .json(&json!({
                "item": "Cloud Credits",
                "amount": 20,
                "scope": "cloud_purchase"
            }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);

        let body: Value = response.json();
        assert_eq!(body["reason"], "Invalid token signature");
    }

    #[tokio::test]
    async fn test_parse_unconfigured_returns_service_unavailable() {
        let server = test_server(None);
        let response = server
            .post("/api/v1/parse")
            .json(&json!({ "description": "let my bot spend $5" }))
            .await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    struct CannedProvider;

    #[async_trait]
    impl IntentProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "Canned"
        }

        async fn complete(&self, _system: &str, _user: &str) -> agentauth_intent::Result<String> {
            Ok(r#"{"agent": "shopping_assistant", "scope": ["cloud_purchase"], "limit": 50, "currency": "USD", "durationMinutes": 60}"#.to_string())
        }
    }

    #[tokio::test]
    async fn test_parse_to_authorize_flow() {
        let server = test_server(Some(IntentParser::new(Arc::new(CannedProvider))));

        let response = server
            .post("/api/v1/parse")
            .json(&json!({
                "description": "Let my shopping assistant spend up to $50 on cloud services for the next hour"
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["parsed"]["agent"], "shopping_assistant");
        assert_eq!(body["parsed"]["durationMinutes"], 60.0);

        // The parsed grant (plus the caller-chosen principal) feeds the
        // issuer directly
        let response = server
            .post("/api/v1/authorize")
            .json(&json!({
                "principal": "user_123",
                "agent": body["parsed"]["agent"],
                "scope": body["parsed"]["scope"],
                "limit": body["parsed"]["limit"],
                "currency": body["parsed"]["currency"],
                "durationMinutes": body["parsed"]["durationMinutes"]
            }))
            .await;
        response.assert_status_ok();
    }
}
