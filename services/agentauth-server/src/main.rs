//! AgentAuth Server
//!
//! HTTP surface for delegated agent authorization:
//!
//! - `POST /api/v1/authorize` — sign a bounded authorization grant
//! - `POST /api/v1/purchase` — gate an action on a presented token
//! - `POST /api/v1/parse` — natural language to structured grant request
//!
//! # Usage
//!
//! ```bash
//! # Start with a signing secret
//! AGENTAUTH_SECRET=... agentauth-server
//!
//! # Development mode (built-in secret, relaxed checks)
//! agentauth-server --dev-mode
//! ```

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agentauth_intent::{IntentParser, OpenAiCompatProvider};
use agentauth_token::{TokenConfig, TokenIssuer, TokenVerifier};

use crate::routes::create_router;
use crate::state::AppState;

/// Development-only signing secret, refused outside --dev-mode
const DEV_SECRET: &str = "agentauth-dev-secret-key-32-bytes!!!";

// =============================================================================
// CLI Arguments
// =============================================================================

/// AgentAuth Server - delegated authorization tokens for autonomous agents
#[derive(Parser, Debug)]
#[command(name = "agentauth-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "AGENTAUTH_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "AGENTAUTH_PORT", default_value_t = 3000)]
    port: u16,

    /// Token signing secret (at least 32 bytes)
    #[arg(long, env = "AGENTAUTH_SECRET")]
    secret: Option<String>,

    /// Issuer name stamped into tokens
    #[arg(long, env = "AGENTAUTH_ISSUER")]
    issuer: Option<String>,

    /// Refuse grant requests with a zero or negative duration
    #[arg(long, env = "AGENTAUTH_STRICT_DURATION")]
    strict_duration: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "AGENTAUTH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, env = "AGENTAUTH_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    /// Enable development mode (built-in signing secret)
    #[arg(long, env = "AGENTAUTH_DEV_MODE")]
    dev_mode: bool,
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting AgentAuth Server"
    );

    // Assemble the token configuration
    let mut token_config = TokenConfig::default();
    token_config.reject_non_positive_duration = args.strict_duration;
    if let Some(issuer) = &args.issuer {
        token_config.issuer = issuer.clone();
    }
    token_config.secret = match &args.secret {
        Some(secret) => secret.clone(),
        None if args.dev_mode => {
            tracing::warn!("Using the built-in development signing secret");
            DEV_SECRET.to_string()
        }
        None => {
            anyhow::bail!(
                "Signing secret must be set. Set AGENTAUTH_SECRET or pass --dev-mode."
            );
        }
    };

    let default_duration = token_config.default_duration;
    let issuer = TokenIssuer::new(token_config.clone())
        .map_err(|e| anyhow::anyhow!("issuer init failed: {e}"))?;
    let verifier = TokenVerifier::new(token_config)
        .map_err(|e| anyhow::anyhow!("verifier init failed: {e}"))?;

    // Intent parsing is optional: only wired up when a provider is
    // configured in the environment
    let provider = OpenAiCompatProvider::from_env();
    let intent = if provider.is_configured() {
        tracing::info!(provider = "OpenAICompat", "Intent parsing enabled");
        Some(IntentParser::new(Arc::new(provider)))
    } else {
        tracing::info!("Intent parsing disabled (no provider configured)");
        None
    };

    let state = Arc::new(AppState {
        issuer,
        verifier,
        default_duration,
        intent,
    });

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    tracing::info!(host = %args.host, port = args.port, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match args.log_format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    Ok(())
}

// =============================================================================
// Graceful Shutdown
// =============================================================================

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["agentauth-server", "--port", "8080", "--dev-mode"]);
        assert_eq!(args.port, 8080);
        assert!(args.dev_mode);
    }

    #[test]
    fn test_dev_secret_is_long_enough() {
        assert!(DEV_SECRET.len() >= 32);
    }
}
