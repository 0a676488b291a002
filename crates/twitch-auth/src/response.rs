//! Provider response shapes
//!
//! Every network operation ends in an `Outcome`: the provider either granted
//! the request (`Success`) or answered with a non-200 status and a failure
//! body (`Failure`). Exactly one payload exists per outcome, so there is no
//! way to observe both or neither.

use serde::{Deserialize, Serialize};

use crate::scope::Scope;

/// Result of a request the provider answered with a well-formed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    Success(T),
    Failure(FailedRequest),
}

/// Outcome of a token request (code exchange, refresh, client credentials).
pub type TokenOutcome = Outcome<AccessToken>;

/// Outcome of a token validation.
pub type ValidationOutcome = Outcome<TokenValidation>;

/// Outcome of a token revocation. Success carries no payload.
pub type RevocationOutcome = Outcome<()>;

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&FailedRequest> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Convert into a `Result`, for callers that want `?` on provider failures.
    pub fn into_result(self) -> Result<T, FailedRequest> {
        match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

/// Token issued by the token endpoint.
///
/// `expires_in` is a delta in seconds from the response time. App-access
/// tokens from the client-credentials grant carry no refresh token and no
/// scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub token_type: String,
    /// Granted scopes. Twitch names this field `scope` on token responses.
    #[serde(default, alias = "scope")]
    pub scopes: Vec<Scope>,
}

/// Body of a successful `/validate` call.
///
/// `login` and `user_id` are absent when the token is an app-access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValidation {
    pub client_id: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// Body of a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRequest {
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for FailedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "provider returned {}: {}", self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_access_token_deserializes_without_optional_fields() {
        let json = r#"{"access_token":"tok","expires_in":3600,"token_type":"bearer"}"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.token_type, "bearer");
        assert!(token.refresh_token.is_none());
        assert!(token.scopes.is_empty());
    }

    #[test]
    fn user_token_accepts_scope_key_from_provider() {
        let json = r#"{
            "access_token":"at_abc",
            "refresh_token":"rt_def",
            "expires_in":14124,
            "scope":["channel:moderate","user:read:chat"],
            "token_type":"bearer"
        }"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.refresh_token.as_deref(), Some("rt_def"));
        assert_eq!(
            token.scopes,
            vec![Scope::ChannelModerate, Scope::UserReadChat]
        );
    }

    #[test]
    fn token_with_unknown_scope_fails_to_decode() {
        let json = r#"{"access_token":"a","expires_in":1,"token_type":"bearer","scopes":["nope"]}"#;
        assert!(serde_json::from_str::<AccessToken>(json).is_err());
    }

    #[test]
    fn validation_of_app_token_has_no_user() {
        let json = r#"{"client_id":"wbmytr93xzw8zbg0p1izqyzzc5mbiz","scopes":[],"expires_in":5520838}"#;
        let validation: TokenValidation = serde_json::from_str(json).unwrap();
        assert_eq!(validation.client_id, "wbmytr93xzw8zbg0p1izqyzzc5mbiz");
        assert!(validation.login.is_none());
        assert!(validation.user_id.is_none());
        assert_eq!(validation.expires_in, 5520838);
    }

    #[test]
    fn failed_request_requires_both_fields() {
        let ok: FailedRequest =
            serde_json::from_str(r#"{"status":401,"message":"invalid access token"}"#).unwrap();
        assert_eq!(ok.status, 401);
        assert_eq!(ok.to_string(), "provider returned 401: invalid access token");

        assert!(serde_json::from_str::<FailedRequest>(r#"{"message":"x"}"#).is_err());
    }

    #[test]
    fn outcome_accessors_expose_exactly_one_side() {
        let success: Outcome<u8> = Outcome::Success(7);
        assert!(success.is_success());
        assert_eq!(success.success(), Some(&7));
        assert!(success.failure().is_none());

        let failure: Outcome<u8> = Outcome::Failure(FailedRequest {
            status: 403,
            message: "forbidden".into(),
        });
        assert!(!failure.is_success());
        assert!(failure.success().is_none());
        assert_eq!(failure.into_result().unwrap_err().status, 403);
    }

    #[test]
    fn outcome_serializes_with_discriminant() {
        let outcome: RevocationOutcome = Outcome::Failure(FailedRequest {
            status: 400,
            message: "invalid token".into(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["failure"]["status"], 400);
        assert_eq!(json["failure"]["message"], "invalid token");
    }
}
