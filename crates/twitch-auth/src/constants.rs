//! Twitch OAuth constants
//!
//! Default endpoint locations and the fixed protocol tags each grant flow
//! sends. Endpoints are only defaults: `Endpoints` can point the same code
//! at any provider instance.

use std::time::Duration;

/// Base of the Twitch identity service. Every endpoint hangs off this path.
pub const TWITCH_BASE_URL: &str = "https://id.twitch.tv/oauth2";

/// Path of the user-facing authorization page
pub const AUTHORIZE_PATH: &str = "/authorize";

/// Path of the token endpoint (code exchange, refresh, client credentials)
pub const TOKEN_PATH: &str = "/token";

/// Path of the token validation endpoint
pub const VALIDATE_PATH: &str = "/validate";

/// Path of the token revocation endpoint
pub const REVOKE_PATH: &str = "/revoke";

/// Upper bound on a single request/response cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

pub const RESPONSE_TYPE_CODE: &str = "code";
pub const RESPONSE_TYPE_TOKEN: &str = "token";
