//! AgentAuth Types - Canonical domain types for delegated agent authorization
//!
//! This crate contains all foundational types for AgentAuth with zero
//! dependencies on other agentauth crates. It defines the type system for:
//!
//! - Identity types (PrincipalId, AgentName)
//! - Scope lists with set-semantic membership
//! - The signed authorization claim set carried by every token
//! - Verification contexts and outcomes
//! - The closed policy-rejection taxonomy and the shared error type
//!
//! # Architectural Invariants
//!
//! These types support the core AgentAuth security invariants:
//!
//! 1. A token is authorization for ONE named agent; presenting it under a
//!    different agent identity must be rejected
//! 2. The claim set is fully determined by the signed token — verifiers
//!    never trust an out-of-band copy of any claim field
//! 3. Verification failure is an ordinary value, never an unwound fault

pub mod claims;
pub mod context;
pub mod error;
pub mod identity;
pub mod outcome;
pub mod scope;

pub use claims::*;
pub use context::*;
pub use error::*;
pub use identity::*;
pub use outcome::*;
pub use scope::*;

/// Version of the AgentAuth types schema
pub const TYPES_VERSION: &str = "0.1.0";
