//! AgentAuth Intent Parser
//!
//! Turns a natural-language delegation request ("let my shopping assistant
//! spend up to $50 on cloud services for the next hour") into a structured
//! authorization request ready for the token issuer.
//!
//! # Key Principle
//!
//! **The language model may PROPOSE a grant, NEVER shape one unchecked.**
//!
//! Model output is untrusted: it is screened for injection markers,
//! parsed strictly, and normalized to safe defaults before anything
//! downstream sees it. Defaulting lives HERE, at the collaborator
//! boundary — the token issuer itself never fills in missing fields.

pub mod parser;
pub mod provider;
pub mod types;

pub use parser::IntentParser;
pub use provider::{IntentProvider, OpenAiCompatConfig, OpenAiCompatProvider};
pub use types::{IntentError, ParsedAuthorization, Result};
