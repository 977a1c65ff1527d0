//! AgentAuth Token Core
//!
//! Issues and verifies the signed, self-contained capability tokens that
//! delegate bounded spending authority from a principal to one named agent.
//!
//! # Token Model
//!
//! | Side | Component | Responsibility |
//! |------|-----------|----------------|
//! | Grant | [`TokenIssuer`] | Validate inputs, stamp timestamps, sign the claim set |
//! | Consume | [`TokenVerifier`] | Recover the claim set, run the policy predicate chain |
//!
//! The two sides share only a [`TokenConfig`] (HMAC secret + issuer name).
//! Tokens are stateless: every verification call recomputes validity from
//! the token, the caller's context, and the clock. The same token can be
//! valid now and rejected a minute later with no state change anywhere.
//!
//! # Why symmetric JWT?
//!
//! - **Self-contained**: the claim set travels inside the token; there is
//!   no lookup store to consult or keep consistent
//! - **Tamper-evident**: HMAC-SHA256 over header+payload; any payload
//!   splice or signature flip fails verification
//! - **Algorithm-pinned**: verifiers accept HS256 only, so a forged header
//!   cannot downgrade the check

pub mod config;
pub mod issuer;
pub mod verifier;

pub use config::TokenConfig;
pub use issuer::{IssueRequest, IssuedGrant, TokenIssuer};
pub use verifier::TokenVerifier;
