//! Permission scopes for AgentAuth tokens
//!
//! A token authorizes exactly the scopes it lists. Membership is a flat
//! string-equality test: no hierarchy, no wildcards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of permission scopes carried by a token.
///
/// Duplicates are permitted in the list; membership is set-semantic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeList(Vec<String>);

impl ScopeList {
    /// Wrap a list of scope strings
    pub fn new(scopes: Vec<String>) -> Self {
        Self(scopes)
    }

    /// Build from string slices, for tests and builders
    pub fn from_slices(scopes: &[&str]) -> Self {
        Self(scopes.iter().map(|s| s.to_string()).collect())
    }

    /// True when the list carries no scopes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when any entry is empty or whitespace-only
    pub fn has_blank_entries(&self) -> bool {
        self.0.iter().any(|s| s.trim().is_empty())
    }

    /// Set-semantic membership test: exact string equality
    pub fn allows(&self, scope: &str) -> bool {
        self.0.iter().any(|s| s == scope)
    }

    /// The scopes as a slice, in issue order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ScopeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl From<Vec<String>> for ScopeList {
    fn from(scopes: Vec<String>) -> Self {
        Self(scopes)
    }
}

impl FromIterator<String> for ScopeList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
