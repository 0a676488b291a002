//! Authorization URL construction
//!
//! The authorization-code and implicit flows send the user to the same
//! `/authorize` page with the same parameters; only `response_type` differs.
//! `AuthorizationRequest` holds the user-facing half of an authenticator's
//! configuration and renders the URL for either flow.

use url::Url;

use crate::scope::{Scope, encode_scopes};

#[derive(Debug, Clone)]
pub(crate) struct AuthorizationRequest {
    pub client_id: String,
    pub redirect_uri: String,
    pub force_verify: bool,
    pub scopes: Vec<Scope>,
    /// Empty means "send no state parameter".
    pub state: String,
}

impl AuthorizationRequest {
    pub(crate) fn new(client_id: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            redirect_uri,
            force_verify: false,
            scopes: Vec::new(),
            state: String::new(),
        }
    }

    /// Render the authorization URL on top of `authorize_endpoint`.
    ///
    /// Parameters are appended in a fixed order: `client_id`, `force_verify`,
    /// `redirect_uri`, `response_type`, `scope`, then `state` only if
    /// non-empty. Providers may reject an empty `state`, so it is omitted
    /// rather than sent blank.
    pub(crate) fn url(&self, authorize_endpoint: &Url, response_type: &str) -> Url {
        let mut url = authorize_endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.client_id)
                .append_pair("force_verify", if self.force_verify { "true" } else { "false" })
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("response_type", response_type)
                .append_pair("scope", &encode_scopes(&self.scopes));
            if !self.state.is_empty() {
                query.append_pair("state", &self.state);
            }
        }
        url
    }
}
