//! Implicit grant flow
//!
//! For clients that cannot keep a secret. The user approves on the consent
//! page and Twitch puts the access token straight into the redirect URI
//! fragment (`#access_token=...`), so the only thing this side builds is the
//! URL. No refresh token is ever issued.
//!
//! Twitch docs: <https://dev.twitch.tv/docs/authentication/getting-tokens-oauth/#implicit-grant-flow>

use url::Url;

use crate::authorize::AuthorizationRequest;
use crate::client::OAuthClient;
use crate::constants::RESPONSE_TYPE_TOKEN;
use crate::error::Result;
use crate::response::{RevocationOutcome, ValidationOutcome};
use crate::scope::Scope;

/// Authenticator for the implicit grant. Holds no client secret.
#[derive(Debug, Clone)]
pub struct ImplicitAuthenticator {
    client: OAuthClient,
    request: AuthorizationRequest,
}

impl ImplicitAuthenticator {
    pub fn new(
        client: OAuthClient,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client,
            request: AuthorizationRequest::new(client_id.into(), redirect_uri.into()),
        }
    }

    /// Make Twitch show the consent page even if the user already approved.
    #[must_use]
    pub fn with_force_verify(mut self, force_verify: bool) -> Self {
        self.request.force_verify = force_verify;
        self
    }

    /// Scopes to request on the consent page.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<Scope>) -> Self {
        self.request.scopes = scopes;
        self
    }

    /// Anti-forgery value echoed back in the redirect fragment. Empty means
    /// none.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.request.state = state.into();
        self
    }

    pub fn client_id(&self) -> &str {
        &self.request.client_id
    }

    /// Scopes this authenticator asks for, not necessarily what the user
    /// granted.
    pub fn scopes(&self) -> &[Scope] {
        &self.request.scopes
    }

    /// URL of the consent page. The token arrives in the redirect fragment.
    pub fn authorization_url(&self) -> Url {
        self.request.url(&self.client.endpoints().authorize, RESPONSE_TYPE_TOKEN)
    }

    /// Replace the requested scopes and return the URL that reflects them.
    pub fn update_scopes(&mut self, scopes: Vec<Scope>) -> Url {
        self.request.scopes = scopes;
        self.authorization_url()
    }

    /// Check a token from the redirect fragment and report its scopes.
    pub async fn validate_token(&self, token: &str) -> Result<ValidationOutcome> {
        self.client.validate_token(token).await
    }

    /// Revoke a token issued to this authenticator's client id.
    pub async fn revoke_token(&self, token: &str) -> Result<RevocationOutcome> {
        self.client.revoke_token(&self.request.client_id, token).await
    }
}
