//! Token validation and revocation
//!
//! Provider-wide operations: they work on any token regardless of which
//! grant produced it, so a caller holding only a token string (and, for
//! revocation, the client id it was issued to) can use them directly.
//!
//! Twitch requires apps to validate user tokens on startup and hourly
//! thereafter; that schedule is the caller's to run.

use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::client::{OAuthClient, Operation, json_body};
use crate::error::Result;
use crate::response::{RevocationOutcome, ValidationOutcome};

impl OAuthClient {
    /// Check a token with `GET /validate`.
    ///
    /// Success carries the client id, scopes and remaining lifetime the
    /// provider reports. An expired or revoked token comes back as a
    /// `Failure` (typically 401), not an error.
    pub async fn validate_token(&self, token: &str) -> Result<ValidationOutcome> {
        debug!(endpoint = %self.endpoints().validate, "validating token");
        let request = self
            .http()
            .get(self.endpoints().validate.clone())
            .header(AUTHORIZATION, format!("Bearer {token}"));

        self.exchange(Operation::Validate, request, json_body).await
    }

    /// Invalidate a token with a form-encoded `POST /revoke`.
    ///
    /// A 200 is success whatever the body contains; revoking an
    /// already-revoked token is not distinguished by this call.
    pub async fn revoke_token(&self, client_id: &str, token: &str) -> Result<RevocationOutcome> {
        debug!(endpoint = %self.endpoints().revoke, client_id, "revoking token");
        let request = self
            .http()
            .post(self.endpoints().revoke.clone())
            .form(&[("client_id", client_id), ("token", token)]);

        self.exchange(Operation::Revoke, request, |_| Ok(())).await
    }
}
