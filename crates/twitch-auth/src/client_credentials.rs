//! Client credentials grant flow
//!
//! Server-to-server: the app trades its own id and secret for an app access
//! token. No user is involved, so there is no authorization URL, no scopes,
//! and no refresh token. When the token expires, request another one.
//!
//! Twitch docs: <https://dev.twitch.tv/docs/authentication/getting-tokens-oauth/#client-credentials-grant-flow>

use common::Secret;
use tracing::debug;

use crate::client::{OAuthClient, Operation, json_body};
use crate::constants::GRANT_CLIENT_CREDENTIALS;
use crate::error::Result;
use crate::response::TokenOutcome;

#[derive(Debug, Clone)]
pub struct ClientCredentialsAuthenticator {
    client: OAuthClient,
    client_id: String,
    client_secret: Secret<String>,
}

impl ClientCredentialsAuthenticator {
    pub fn new(
        client: OAuthClient,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Request an app access token.
    pub async fn request_token(&self) -> Result<TokenOutcome> {
        debug!(client_id = %self.client_id, "requesting app access token");
        let request = self.client.token_request(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose().as_str()),
            ("grant_type", GRANT_CLIENT_CREDENTIALS),
        ]);

        self.client
            .exchange(Operation::ClientCredentials, request, json_body)
            .await
    }
}
