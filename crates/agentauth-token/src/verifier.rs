//! Token verification
//!
//! An ordered, short-circuiting predicate chain. Order matters for
//! deterministic error reporting: signature before expiry, expiry before
//! agent binding, binding before scope, scope before limit. Every check
//! after the first operates on the RECOVERED claim set; caller input is
//! compared against it, never substituted into it.

use crate::config::TokenConfig;
use agentauth_types::{
    AuthorizationClaims, PolicyRejection, Result, VerificationContext, VerificationOutcome,
};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Verifies presented tokens against the policy predicate chain.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a new verifier; fails on invalid configuration
    pub fn new(config: TokenConfig) -> Result<Self> {
        config.validate()?;

        // Pin the algorithm to HS256 so a forged header cannot substitute
        // a weaker one. Expiry is NOT delegated to the JWT layer: it is
        // step 2 of the chain, after the signature verdict.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims::<&str>(&[]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Verify a token against the caller's context at the current time.
    ///
    /// Rejections are returned as data; this never fails as an error.
    pub fn verify(&self, token: &str, context: &VerificationContext) -> VerificationOutcome {
        self.verify_at(token, context, Utc::now())
    }

    /// Verify against an explicit clock. Verification is a pure function
    /// of token + context + time + key, so the same call is reproducible.
    pub fn verify_at(
        &self,
        token: &str,
        context: &VerificationContext,
        now: DateTime<Utc>,
    ) -> VerificationOutcome {
        // 1. Signature. Structural corruption, wrong algorithm, and
        //    signature mismatch all fold into the same rejection.
        let claims =
            match decode::<AuthorizationClaims>(token, &self.decoding_key, &self.validation) {
                Ok(data) => data.claims,
                Err(err) => {
                    tracing::debug!(error = %err, "token failed signature verification");
                    return VerificationOutcome::Invalid(PolicyRejection::Signature);
                }
            };

        // 2. Expiry (inclusive at the boundary)
        if claims.is_expired_at(now) {
            return VerificationOutcome::Invalid(PolicyRejection::Expired);
        }

        // 3. Agent binding, only when the presenter is attributed
        if let Some(requesting) = &context.requesting_agent {
            if requesting != &claims.agent {
                return VerificationOutcome::Invalid(PolicyRejection::AgentMismatch {
                    requesting: requesting.clone(),
                    bound: claims.agent.clone(),
                });
            }
        }

        // 4. Scope membership
        if !claims.allows_scope(&context.required_scope) {
            return VerificationOutcome::Invalid(PolicyRejection::ScopeDenied {
                required: context.required_scope.clone(),
            });
        }

        // 5. Limit (equality passes)
        if !claims.covers_amount(context.amount) {
            return VerificationOutcome::Invalid(PolicyRejection::LimitExceeded {
                amount: context.amount,
                limit: claims.limit,
            });
        }

        VerificationOutcome::Valid(claims)
    }
}
