//! Token issuance
//!
//! The issuer exclusively owns claim-set construction: callers supply the
//! delegation fields and a RELATIVE duration, the issuer stamps `issuedAt`,
//! computes `expiresAt`, fixes the `issuer` constant, and signs. No caller
//! ever supplies an absolute expiry.

use crate::config::TokenConfig;
use agentauth_types::{
    AgentAuthError, AgentName, AuthorizationClaims, PrincipalId, Result, ScopeList,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Caller-supplied fields of an authorization grant.
#[derive(Debug, Clone)]
pub struct IssueRequest {
    /// The human or account delegating authority
    pub principal: PrincipalId,
    /// The agent the authority is bound to
    pub agent: AgentName,
    /// Permission scopes to grant
    pub scope: ScopeList,
    /// Spending ceiling
    pub limit: f64,
    /// Currency code for the limit
    pub currency: String,
    /// Authorization lifetime in minutes, relative to issuance
    pub duration_minutes: f64,
}

/// A freshly signed token together with the claim set it carries, for
/// callers that display or log the grant they just made.
#[derive(Debug, Clone)]
pub struct IssuedGrant {
    /// The opaque signed token
    pub token: String,
    /// The claim set the token carries
    pub claims: AuthorizationClaims,
}

/// Builds and signs authorization claim sets.
#[derive(Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Create a new issuer; fails on invalid configuration
    pub fn new(config: TokenConfig) -> Result<Self> {
        config.validate()?;
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        Ok(Self {
            config,
            encoding_key,
        })
    }

    /// Issue a signed token for the given grant.
    ///
    /// Returns the three-part base64url token as an opaque string. Fails
    /// with `InvalidInput` on malformed fields; does not judge the
    /// business sense of the duration unless the config says to.
    pub fn issue(&self, request: &IssueRequest) -> Result<String> {
        Ok(self.grant(request)?.token)
    }

    /// Issue a token and also hand back the claim set it carries
    pub fn grant(&self, request: &IssueRequest) -> Result<IssuedGrant> {
        self.grant_with_clock(request, Utc::now())
    }

    pub(crate) fn grant_with_clock(
        &self,
        request: &IssueRequest,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedGrant> {
        self.check_request(request)?;

        // Fractional minutes are honored at millisecond resolution
        let lifetime = Duration::milliseconds((request.duration_minutes * 60_000.0).round() as i64);

        let claims = AuthorizationClaims {
            principal: request.principal.clone(),
            agent: request.agent.clone(),
            scope: request.scope.clone(),
            limit: request.limit,
            currency: request.currency.clone(),
            issued_at,
            expires_at: issued_at + lifetime,
            issuer: self.config.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AgentAuthError::TokenEncoding {
                message: e.to_string(),
            })?;

        tracing::debug!(
            principal = %claims.principal,
            agent = %claims.agent,
            expires_at = %claims.expires_at,
            "issued authorization token"
        );

        Ok(IssuedGrant { token, claims })
    }

    fn check_request(&self, request: &IssueRequest) -> Result<()> {
        if request.principal.is_blank() {
            return Err(AgentAuthError::invalid_input(
                "principal",
                "must not be empty",
            ));
        }
        if request.agent.is_blank() {
            return Err(AgentAuthError::invalid_input("agent", "must not be empty"));
        }
        if request.scope.is_empty() {
            return Err(AgentAuthError::invalid_input(
                "scope",
                "must list at least one scope",
            ));
        }
        if request.scope.has_blank_entries() {
            return Err(AgentAuthError::invalid_input(
                "scope",
                "scope entries must not be empty",
            ));
        }
        if !request.limit.is_finite() {
            return Err(AgentAuthError::invalid_input("limit", "must be finite"));
        }
        if request.limit < 0.0 {
            return Err(AgentAuthError::invalid_input(
                "limit",
                "must not be negative",
            ));
        }
        if request.currency.trim().is_empty() {
            return Err(AgentAuthError::invalid_input(
                "currency",
                "must not be empty",
            ));
        }
        if !request.duration_minutes.is_finite() {
            return Err(AgentAuthError::invalid_input(
                "durationMinutes",
                "must be finite",
            ));
        }
        if self.config.reject_non_positive_duration && request.duration_minutes <= 0.0 {
            return Err(AgentAuthError::invalid_input(
                "durationMinutes",
                "must be positive",
            ));
        }
        Ok(())
    }
}
