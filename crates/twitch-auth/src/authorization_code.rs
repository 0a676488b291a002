//! Authorization code grant flow
//!
//! 1. `authorization_url()` gives the page the user visits to approve the app
//! 2. Twitch redirects to `redirect_uri` with `?code=...&state=...`
//! 3. `exchange_code()` trades that code for a user access token
//! 4. `refresh_token()` trades the refresh token for a new access token
//!
//! Handling the redirect (and checking `state`) is the caller's job.
//!
//! Twitch docs: <https://dev.twitch.tv/docs/authentication/getting-tokens-oauth/#authorization-code-grant-flow>

use common::Secret;
use tracing::debug;
use url::Url;

use crate::authorize::AuthorizationRequest;
use crate::client::{OAuthClient, Operation, json_body};
use crate::constants::{GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN, RESPONSE_TYPE_CODE};
use crate::error::Result;
use crate::response::{RevocationOutcome, TokenOutcome, ValidationOutcome};
use crate::scope::Scope;

/// Authenticator for the authorization code grant.
///
/// Only the requested scopes can change after construction, via
/// `update_scopes`.
#[derive(Debug, Clone)]
pub struct AuthorizationCodeAuthenticator {
    client: OAuthClient,
    request: AuthorizationRequest,
    client_secret: Secret<String>,
}

impl AuthorizationCodeAuthenticator {
    pub fn new(
        client: OAuthClient,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client,
            request: AuthorizationRequest::new(client_id.into(), redirect_uri.into()),
            client_secret: Secret::new(client_secret.into()),
        }
    }

    /// Make Twitch show the consent page even if the user already approved.
    #[must_use]
    pub fn with_force_verify(mut self, force_verify: bool) -> Self {
        self.request.force_verify = force_verify;
        self
    }

    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<Scope>) -> Self {
        self.request.scopes = scopes;
        self
    }

    /// Anti-forgery value echoed back on the redirect. Empty means none.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.request.state = state.into();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.request.client_id
    }

    /// Scopes this authenticator asks for. Not necessarily what the user
    /// granted; `validate_token` reports that.
    pub fn scopes(&self) -> &[Scope] {
        &self.request.scopes
    }

    /// URL of the consent page for the current configuration.
    pub fn authorization_url(&self) -> Url {
        self.request.url(&self.client.endpoints().authorize, RESPONSE_TYPE_CODE)
    }

    /// Replace the requested scopes and return the URL that reflects them.
    pub fn update_scopes(&mut self, scopes: Vec<Scope>) -> Url {
        self.request.scopes = scopes;
        self.authorization_url()
    }

    /// Exchange the code from the redirect for a user access token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenOutcome> {
        debug!(client_id = self.client_id(), "exchanging authorization code");
        let request = self.client.token_request(&[
            ("client_id", self.request.client_id.as_str()),
            ("client_secret", self.client_secret.expose().as_str()),
            ("code", code),
            ("grant_type", GRANT_AUTHORIZATION_CODE),
            ("redirect_uri", self.request.redirect_uri.as_str()),
        ]);

        self.client
            .exchange(Operation::ExchangeCode, request, json_body)
            .await
    }

    /// Get a fresh access token with a refresh token from an earlier exchange.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenOutcome> {
        debug!(client_id = self.client_id(), "refreshing user token");
        let request = self.client.token_request(&[
            ("client_id", self.request.client_id.as_str()),
            ("client_secret", self.client_secret.expose().as_str()),
            ("grant_type", GRANT_REFRESH_TOKEN),
            ("refresh_token", refresh_token),
        ]);

        self.client
            .exchange(Operation::RefreshToken, request, json_body)
            .await
    }

    pub async fn validate_token(&self, token: &str) -> Result<ValidationOutcome> {
        self.client.validate_token(token).await
    }

    /// Revoke a token issued to this authenticator's client id.
    pub async fn revoke_token(&self, token: &str) -> Result<RevocationOutcome> {
        self.client.revoke_token(&self.request.client_id, token).await
    }
}
